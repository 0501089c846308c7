//! Subcommand definitions.

use clap::Subcommand;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved directory layout without touching the filesystem
    Paths {
        /// Emit JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },
    /// Create any missing data, model and output directories
    Init {
        /// Also confirm each directory accepts writes
        #[arg(long)]
        check_writable: bool,
    },
    /// Report which directories exist, without creating anything
    Check {
        /// Emit JSON instead of an aligned table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use crate::Cli;
    use crate::commands::Commands;
    use clap::Parser;

    #[test]
    fn paths_json_flag() {
        let cli = Cli::parse_from(["labroot", "paths", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Paths { json: true })));
    }

    #[test]
    fn paths_defaults_to_text() {
        let cli = Cli::parse_from(["labroot", "paths"]);
        assert!(matches!(cli.command, Some(Commands::Paths { json: false })));
    }

    #[test]
    fn check_json_flag() {
        let cli = Cli::parse_from(["labroot", "check", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Check { json: true })));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["labroot", "train"]).is_err());
    }
}
