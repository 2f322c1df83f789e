use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::core::context::ShellContext;

pub const STATUS_NOT_FOUND: i32 = 127;

/// Spawns the command held in the context's argument vector as a child
/// process with stdio inherited.
#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(quiet_mode: bool) -> Self {
        ProcessExecutor { quiet_mode }
    }

    /// Runs `ctx.argv` and returns the child's exit status. The child gets
    /// the environment snapshot verbatim: its table is cleared and refilled
    /// from the context's entries, nothing else. A program that cannot be
    /// found is reported on stderr and mapped to status 127 rather than an
    /// error, so the loop keeps prompting.
    pub fn spawn(&self, ctx: &ShellContext) -> Result<i32, ProcessError> {
        let Some(program) = ctx.argv.first() else {
            return Ok(0);
        };

        let mut command = Command::new(program);
        command
            .args(&ctx.argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(ctx.env().iter());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !self.quiet_mode {
                    eprintln!("{}: {}: not found", ctx.shell_name(), program);
                }
                return Ok(STATUS_NOT_FOUND);
            }
            Err(e) => return Err(e.into()),
        };

        signal::install_sigint_handler()?;

        let status = child.wait()?;
        Ok(status
            .code()
            .or_else(|| status.signal().map(|sig| 128 + sig))
            .unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvTable;

    fn context_with(argv: &[&str], env: EnvTable) -> ShellContext {
        let mut ctx = ShellContext::with_env("rill", env);
        ctx.argv = argv.iter().map(|s| s.to_string()).collect();
        ctx
    }

    #[test]
    fn test_spawn_missing_program_maps_to_127() {
        let executor = ProcessExecutor::new(true);
        let ctx = context_with(&["rill-no-such-program"], EnvTable::new());
        assert_eq!(executor.spawn(&ctx).unwrap(), STATUS_NOT_FOUND);
    }

    #[test]
    fn test_spawn_empty_argv_is_a_no_op() {
        let executor = ProcessExecutor::new(true);
        let ctx = context_with(&[], EnvTable::new());
        assert_eq!(executor.spawn(&ctx).unwrap(), 0);
    }

    #[test]
    fn test_spawn_reports_child_status() {
        let executor = ProcessExecutor::new(true);
        let ctx = context_with(&["/bin/sh", "-c", "exit 3"], EnvTable::new());
        assert_eq!(executor.spawn(&ctx).unwrap(), 3);
    }

    #[test]
    fn test_child_sees_snapshot_only() {
        let executor = ProcessExecutor::new(true);
        let table = EnvTable::new().update("RILL_CHILD_VAR", "1").unwrap();
        let ctx = context_with(
            &["/bin/sh", "-c", "test \"$RILL_CHILD_VAR\" = 1"],
            table,
        );
        assert_eq!(executor.spawn(&ctx).unwrap(), 0);

        // A variable absent from the table must be absent in the child,
        // even when set in the shell's own process environment.
        std::env::set_var("RILL_LEAKED_VAR", "1");
        let ctx = context_with(
            &["/bin/sh", "-c", "test -z \"$RILL_LEAKED_VAR\""],
            EnvTable::new(),
        );
        assert_eq!(executor.spawn(&ctx).unwrap(), 0);
        std::env::remove_var("RILL_LEAKED_VAR");
    }
}
