//! Path utilities for the project directory layout.
//!
//! This module provides the canonical path resolution for every consumer:
//! - Base directory (compiled anchor, env override, explicit override)
//! - Named data, model and output directories
//! - Idempotent creation of the directories downstream code writes to
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No global state: `ProjectPaths` is built once and passed by reference
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod base;
mod ensure;
mod error;
mod layout;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Anchor and overrides
pub use base::{BASE_DIR_ENV, BaseDirResolution, BaseDirSource, resolve_base_dir_with};
pub use platform::resolve_base_directory;

// Layout
pub use layout::{NamedPath, PathState, PathStatus, ProjectPaths, derive};

// Directory operations
pub use ensure::{
    DirectoryCreationStrategy, ensure_directory, ensure_directory_exists, verify_writable,
};

// One-call resolver for adapters
pub use resolver::ResolvedProject;
