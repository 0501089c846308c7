//! Directory creation and verification utilities.
//!
//! `ensure_directory_exists` is the create-if-missing primitive used by the
//! project layout. `ensure_directory` adds a strategy for callers that must
//! not create anything. Neither prompts; adapters own user interaction.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// Prefix of the throwaway file written by [`verify_writable`].
const WRITE_CHECK_PREFIX: &str = ".labroot_write_test";

/// Strategy for how to handle missing directories when ensuring they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create directories automatically if they are missing.
    #[default]
    AutoCreate,
    /// Do not create directories; return an error if missing.
    Disallow,
}

/// Create `path` and any missing parents; succeed silently if it already exists.
///
/// A directory created concurrently by another process counts as success.
/// Every failure is reported as [`PathError::Filesystem`].
pub fn ensure_directory_exists(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        debug!(path = %path.display(), "directory already present");
        return Ok(());
    }

    // create_dir_all treats a concurrent winner as success.
    fs::create_dir_all(path).map_err(|source| PathError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Ensure the provided directory exists according to the chosen strategy.
///
/// If the directory exists, verifies it's actually a directory.
/// If the directory doesn't exist, behavior depends on `strategy`:
/// - `AutoCreate`: Creates the directory (and parents)
/// - `Disallow`: Returns an error
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    match strategy {
        DirectoryCreationStrategy::AutoCreate => ensure_directory_exists(path),
        DirectoryCreationStrategy::Disallow => {
            Err(PathError::DirectoryNotFound(path.to_path_buf()))
        }
    }
}

/// Verify a directory is writable by creating and removing a uniquely named file.
///
/// Existing entries in `path` are never opened, so a user file that happens to
/// share the marker prefix is left alone.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let not_writable = |e: std::io::Error| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = tempfile::Builder::new()
        .prefix(WRITE_CHECK_PREFIX)
        .tempfile_in(path)
        .map_err(not_writable)?;
    file.write_all(b"test").map_err(not_writable)?;

    let check_file = file.path().to_path_buf();
    if let Err(e) = file.close() {
        debug!(path = %check_file.display(), error = %e, "failed to remove write-check file");
    }
    Ok(())
}
