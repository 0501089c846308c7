//! Check command handler.
//!
//! Read-only: reports the state of every named path and fails when an
//! ensured directory is missing or blocked.

use std::fmt::Write as _;

use anyhow::Result;
use labroot_core::{PathState, PathStatus};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

fn state_label(state: PathState) -> &'static str {
    match state {
        PathState::Present => "ok",
        PathState::Missing => "missing",
        PathState::NotADirectory => "not a directory",
    }
}

/// Render one aligned line per named path.
pub fn render(status: &[PathStatus]) -> String {
    let mut out = String::new();
    for entry in status {
        let _ = writeln!(
            out,
            "{:<15} {:<16} {}",
            entry.name.key(),
            state_label(entry.state),
            entry.path.display()
        );
    }
    out.trim_end().to_string()
}

/// Render the status list as pretty JSON.
pub fn render_json(status: &[PathStatus]) -> Result<String> {
    Ok(serde_json::to_string_pretty(status)?)
}

/// Execute the check command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let status = ctx.paths().status();
    if json {
        println!("{}", render_json(&status)?);
    } else {
        println!("{}", render(&status));
    }

    let problems = ctx.paths().verify();
    for problem in &problems {
        warn!("{problem}");
    }
    if !problems.is_empty() {
        return Err(CliError::LayoutIncomplete(problems.len()).into());
    }
    Ok(())
}
