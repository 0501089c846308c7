//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting and preparing the project layout.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser, Debug)]
#[command(name = "labroot")]
#[command(about = "Resolve and prepare the project data, model and output directories")]
#[command(version)]
pub struct Cli {
    /// Override the base directory for this invocation
    #[arg(long = "base-dir", global = true)]
    pub base_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
