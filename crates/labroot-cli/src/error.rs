//! CLI-specific error types and mappings.
//!
//! Maps `PathError` to exit codes and user-facing messages.

use labroot_core::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A directory could not be created or inspected.
    #[error("{0}")]
    Filesystem(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The environment needed to resolve paths is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be written.
    #[error("IO error: {0}")]
    Io(String),

    /// `check` found ensured directories that are missing or blocked.
    #[error("Layout incomplete: {0} required path(s) missing or blocked")]
    LayoutIncomplete(usize),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::LayoutIncomplete(_) => 1,
            Self::Arguments(_) => 2,                 // EX_USAGE
            Self::Filesystem(_) | Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78,                   // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::Filesystem { .. }
            | PathError::NotADirectory(_)
            | PathError::DirectoryNotFound(_)
            | PathError::NotWritable { .. } => Self::Filesystem(err.to_string()),
            PathError::EmptyPath => Self::Arguments(err.to_string()),
            PathError::NoHomeDir | PathError::CurrentDirError(_) => Self::Config(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
