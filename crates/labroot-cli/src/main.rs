//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging, resolves the project layout once
//! via bootstrap, then dispatches to a handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use labroot_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig {
        base_dir: cli.base_dir,
    })?;

    match command {
        Commands::Paths { json } => handlers::paths::execute(&ctx, json)?,
        Commands::Init { check_writable } => handlers::init::execute(&ctx, check_writable)?,
        Commands::Check { json } => handlers::check::execute(&ctx, json)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables (LABROOT_BASE_DIR, RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
