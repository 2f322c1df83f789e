use super::{Command, CommandError};
use crate::core::context::ShellContext;

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> Result<(), CommandError> {
        println!("Built-in commands:");
        println!("  cd [DIR]            Change directory (defaults to home)");
        println!("  env                 Print the environment, one entry per line");
        println!("  exit [STATUS]       Exit with STATUS or the last command's status");
        println!("  help                Show this message");
        println!("  setenv NAME VALUE   Set or update an environment variable");
        println!("\nAnything else is resolved through PATH and run as a child process.");
        Ok(())
    }
}
