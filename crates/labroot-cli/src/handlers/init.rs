//! Init command handler.
//!
//! Creates every missing ensured directory, then optionally checks each one
//! for write access.

use std::fmt::Write as _;

use anyhow::Result;
use labroot_core::verify_writable;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Create the layout and return the report printed to stdout.
pub fn run(ctx: &CliContext, check_writable: bool) -> Result<String, CliError> {
    let paths = ctx.paths();
    paths.ensure()?;

    let mut report = String::new();
    for (name, path) in paths.ensured() {
        if check_writable {
            verify_writable(path)?;
            debug!(%name, "write check passed");
        }
        let _ = writeln!(report, "{} = {}", name.constant_name(), path.display());
    }
    Ok(report.trim_end().to_string())
}

/// Execute the init command.
pub fn execute(ctx: &CliContext, check_writable: bool) -> Result<()> {
    let report = run(ctx, check_writable)?;
    println!("{report}");
    Ok(())
}
