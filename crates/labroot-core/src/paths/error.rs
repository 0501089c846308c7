//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! adapter-specific concerns.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// The filesystem refused to create a directory.
    ///
    /// Covers permission failures, a non-directory blocking the path, and
    /// storage exhaustion. The underlying message is surfaced unmodified.
    #[error("Failed to create directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist and creation was not allowed.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

impl PathError {
    /// The I/O error kind behind a filesystem failure, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
