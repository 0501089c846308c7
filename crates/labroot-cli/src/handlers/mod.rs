//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Rendering lives in a separate pure function so it can be tested
//! - No path resolution; the context already carries the layout

pub mod check;
pub mod init;
pub mod paths;
