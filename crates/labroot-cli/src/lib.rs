//! Command-line adapter for labroot.
//!
//! `main.rs` is the composition root; everything it wires together lives here
//! so handlers can be tested without spawning the binary.

#![deny(unused_crate_dependencies)]

// Only used by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
