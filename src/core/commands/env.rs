use super::{Command, CommandError};
use crate::core::context::ShellContext;

/// Prints the current environment snapshot, one `name=value` per line.
#[derive(Clone)]
pub struct EnvCommand;

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> Result<(), CommandError> {
        for entry in ctx.env().entries() {
            println!("{}", entry);
        }
        Ok(())
    }
}
