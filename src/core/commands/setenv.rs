use super::{Command, CommandError};
use crate::core::context::ShellContext;

/// The one built-in that mutates the environment table.
#[derive(Clone)]
pub struct SetenvCommand;

impl Default for SetenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetenvCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
        let (name, value) = match args {
            [name, value] => (name, value),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "usage: setenv NAME VALUE".to_string(),
                ))
            }
        };

        let table = ctx.env().update(name, value)?;
        ctx.replace_env(table);
        Ok(())
    }
}
