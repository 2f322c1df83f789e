use super::{Command, CommandError};
use crate::core::context::ShellContext;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Terminates the shell with the given status, or with the last
    /// recorded exit status when no argument is supplied.
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
        let status = match args.first() {
            Some(arg) => arg.parse::<i32>().map_err(|_| {
                CommandError::InvalidArguments(format!("exit: {}: numeric argument required", arg))
            })?,
            None => ctx.last_status(),
        };
        std::process::exit(status);
    }
}
