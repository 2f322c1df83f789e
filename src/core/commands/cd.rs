use super::{Command, CommandError};
use crate::core::context::ShellContext;
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
        let target = args.first().map(String::as_str).unwrap_or("~");
        let expanded = self
            .path_expander
            .expand(target)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        env::set_current_dir(&expanded).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", expanded.display(), e))
        })?;

        // Rebind PWD/OLDPWD in one swap so no snapshot sees only half of
        // the move.
        let cwd = env::current_dir()?;
        let previous = ctx.env().lookup("PWD").map(str::to_owned);
        let mut table = ctx.env().update("PWD", &cwd.to_string_lossy())?;
        if let Some(previous) = previous {
            table = table.update("OLDPWD", &previous)?;
        }
        ctx.replace_env(table);

        Ok(())
    }
}
