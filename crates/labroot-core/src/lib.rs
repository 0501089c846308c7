//! Core path configuration for labroot.
//!
//! Resolves the project base directory and the data, model and output
//! directories beneath it, and creates the ones downstream code writes to.
//!
//! ```no_run
//! use labroot_core::ProjectPaths;
//!
//! let paths = ProjectPaths::from_base(labroot_core::resolve_base_directory());
//! paths.ensure()?;
//! println!("raw data lives in {}", paths.data_raw().display());
//! # Ok::<(), labroot_core::PathError>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    BASE_DIR_ENV, BaseDirResolution, BaseDirSource, DirectoryCreationStrategy, NamedPath,
    PathError, PathState, PathStatus, ProjectPaths, ResolvedProject, derive, ensure_directory,
    ensure_directory_exists, resolve_base_dir_with, resolve_base_directory, verify_writable,
};

