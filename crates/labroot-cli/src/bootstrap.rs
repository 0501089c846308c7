//! CLI bootstrap - the composition root.
//!
//! Resolves the project layout exactly once. Handlers receive the resulting
//! `CliContext` by reference and never resolve paths themselves.

use labroot_core::{ProjectPaths, ResolvedProject};
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Base directory passed with `--base-dir`, if any.
    pub base_dir: Option<String>,
}

/// Fully resolved context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// The layout and where its base directory came from.
    pub project: ResolvedProject,
}

impl CliContext {
    /// Access the resolved directory layout.
    pub fn paths(&self) -> &ProjectPaths {
        &self.project.paths
    }
}

/// Bootstrap the CLI application.
///
/// Filesystem writes are left to the `init` handler; resolution alone
/// never creates directories.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let project = ResolvedProject::resolve_with_base_dir(config.base_dir.as_deref())?;
    debug!(
        base_dir = %project.paths.base_dir().display(),
        source = ?project.base_source,
        "resolved project layout"
    );
    Ok(CliContext { project })
}
