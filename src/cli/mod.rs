//! CLI argument definitions for qdash.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// qdash - Software quality metrics in the terminal.
///
/// Run without a subcommand to open the dashboard.
#[derive(Parser, Debug)]
#[command(name = "qdash")]
#[command(author, version = crate::VERSION, about = "A terminal dashboard for ISO/IEC 25010 quality metrics", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Path to config.kdl (defaults to ~/.config/qdash/config.kdl)
    #[arg(long = "config", global = true, env = "QDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project to select (ecommerce-platform, mobile-banking, inventory-system)
    #[arg(short = 'p', long, global = true)]
    pub project: Option<String>,

    /// Tab to show (overview, characteristics, sonarqube, trends, tools)
    #[arg(short = 't', long, global = true)]
    pub tab: Option<String>,

    /// Number of bars in the top characteristics chart
    #[arg(long = "top-n", global = true)]
    pub top_n: Option<usize>,

    /// Characteristic values: "supplied" or "computed" from sub-characteristics
    #[arg(long, global = true)]
    pub aggregate: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Tui,

    /// Print the dashboard view for the selected project and tab
    ///
    /// Contains exactly what the dashboard would render, with the
    /// last-updated clock sampled once.
    Snapshot,

    /// List known projects with their overall score
    Projects,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration and where each value came from
    Show,

    /// Write the resolved configuration to config.kdl
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["qdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.human_readable);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "qdash",
            "snapshot",
            "--project",
            "inventory-system",
            "--tab",
            "sonarqube",
            "-H",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Snapshot)));
        assert_eq!(cli.project.as_deref(), Some("inventory-system"));
        assert_eq!(cli.tab.as_deref(), Some("sonarqube"));
        assert!(cli.human_readable);
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["qdash", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Init { force },
            }) => assert!(force),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_top_n_must_be_numeric() {
        assert!(Cli::try_parse_from(["qdash", "--top-n", "many"]).is_err());
    }
}
