//! One-call resolution of the whole project layout.
//!
//! Adapters call this once at startup and hand the result down by reference.

use std::fmt;

use serde::Serialize;

use super::base::{BaseDirSource, resolve_base_dir_with};
use super::error::PathError;
use super::layout::ProjectPaths;

/// The project layout together with where its base directory came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProject {
    pub paths: ProjectPaths,
    pub base_source: BaseDirSource,
}

impl ResolvedProject {
    /// Resolve using the environment and the compiled anchor.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_base_dir(None)
    }

    /// Resolve with an explicit base directory override.
    pub fn resolve_with_base_dir(base_dir: Option<&str>) -> Result<Self, PathError> {
        let base = resolve_base_dir_with(base_dir)?;
        Ok(Self {
            paths: ProjectPaths::from_base(base.path),
            base_source: base.source,
        })
    }
}

impl fmt::Display for ResolvedProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.paths)?;
        write!(f, "base_source = {}", self.base_source)
    }
}
