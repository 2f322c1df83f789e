use std::collections::BTreeMap;

mod cd;
mod env;
mod exit;
mod help;
mod setenv;

pub use cd::CdCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use setenv::SetenvCommand;

use crate::core::context::ShellContext;
use crate::core::env::EnvError;
use crate::flags::Flags;
use crate::path::PathResolver;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
    EnvError(EnvError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
            CommandError::EnvError(err) => write!(f, "Environment error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

pub trait Command {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Env(EnvCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Setenv(SetenvCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Env(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Setenv(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Dispatches a tokenized command: built-ins run in-process, everything
/// else goes through PATH resolution and the process executor.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    resolver: PathResolver,
    process: ProcessExecutor,
    debug: bool,
    quiet: bool,
}

impl CommandExecutor {
    pub fn new(flags: &Flags) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("env".to_string(), CommandType::Env(EnvCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        commands.insert(
            "setenv".to_string(),
            CommandType::Setenv(SetenvCommand::new()),
        );

        Self {
            commands,
            resolver: PathResolver::new(),
            process: ProcessExecutor::new(flags.is_set("quiet")),
            debug: flags.is_set("debug"),
            quiet: flags.is_set("quiet"),
        }
    }

    /// Runs the command held in `ctx.argv`, recording its exit status.
    /// For external commands, `argv[0]` is rewritten to the resolved path
    /// when PATH resolution succeeds and left untouched otherwise.
    pub fn execute(&self, ctx: &mut ShellContext) -> Result<(), CommandError> {
        let Some(name) = ctx.argv.first().cloned() else {
            return Ok(());
        };

        if let Some(builtin) = self.commands.get(name.as_str()) {
            let args: Vec<String> = ctx.argv[1..].to_vec();
            builtin.execute(ctx, &args)?;
            ctx.set_status(0);
            return Ok(());
        }

        if let Some(resolved) = self.resolver.resolve(&name, ctx.env()) {
            if self.debug && !self.quiet {
                eprintln!("{}: exec {}", ctx.shell_name(), resolved);
            }
            ctx.argv[0] = resolved;
        }

        let status = self.process.spawn(ctx)?;
        ctx.set_status(status);
        Ok(())
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
