use crate::core::commands::CommandError;
use crate::core::env::EnvError;
use crate::input::ReadError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Read(ReadError),
    HomeDirNotFound,
    Env(EnvError),
    Command(CommandError),
    Process(ProcessError),
    FlagError(String),
    CtrlC(String),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ReadError> for ShellError {
    fn from(err: ReadError) -> Self {
        ShellError::Read(err)
    }
}

impl From<EnvError> for ShellError {
    fn from(err: EnvError) -> Self {
        ShellError::Env(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Read(e) => write!(f, "Read error: {}", e),
            ShellError::HomeDirNotFound => write!(f, "Home directory not found"),
            ShellError::Env(e) => write!(f, "Environment error: {}", e),
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::Process(e) => write!(f, "Process error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
