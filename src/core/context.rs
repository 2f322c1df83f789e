use crate::core::env::EnvTable;

/// Per-session state threaded through built-ins and the executor: the
/// current argument vector, the environment table, the shell's own name
/// for diagnostics, and the last recorded exit status.
pub struct ShellContext {
    shell_name: String,
    pub argv: Vec<String>,
    env: EnvTable,
    last_status: i32,
    env_updated: bool,
}

impl ShellContext {
    pub fn new(shell_name: impl Into<String>) -> Self {
        Self::with_env(shell_name, EnvTable::from_process())
    }

    pub fn with_env(shell_name: impl Into<String>, env: EnvTable) -> Self {
        Self {
            shell_name: shell_name.into(),
            argv: Vec::new(),
            env,
            last_status: 0,
            env_updated: false,
        }
    }

    pub fn shell_name(&self) -> &str {
        &self.shell_name
    }

    pub fn env(&self) -> &EnvTable {
        &self.env
    }

    /// Swaps in a fully built replacement table. This is the single
    /// reassignment that makes an environment update visible; the old
    /// table is dropped only after the new one is complete.
    pub fn replace_env(&mut self, table: EnvTable) {
        self.env = table;
        self.env_updated = true;
    }

    pub fn env_updated(&self) -> bool {
        self.env_updated
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_status(&mut self, status: i32) {
        self.last_status = status;
    }

    /// Resets per-command state before the next prompt iteration.
    pub fn begin_command(&mut self) {
        self.argv.clear();
        self.env_updated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_env_swaps_and_flags() {
        let mut ctx = ShellContext::with_env("rill", EnvTable::new());
        assert!(!ctx.env_updated());

        let table = ctx.env().update("FOO", "bar").unwrap();
        ctx.replace_env(table);

        assert!(ctx.env_updated());
        assert_eq!(ctx.env().lookup("FOO"), Some("bar"));
    }

    #[test]
    fn test_begin_command_resets_iteration_state() {
        let mut ctx = ShellContext::with_env("rill", EnvTable::new());
        ctx.argv = vec!["ls".to_string()];
        ctx.replace_env(EnvTable::new());
        ctx.set_status(2);

        ctx.begin_command();

        assert!(ctx.argv.is_empty());
        assert!(!ctx.env_updated());
        // The exit status survives across iterations.
        assert_eq!(ctx.last_status(), 2);
    }
}
