use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::{ProcessExecutor, STATUS_NOT_FOUND};

#[derive(Debug)]
pub enum ProcessError {
    SignalError(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
