//! CLI command definitions and dispatch for the `hire` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod browse;
pub mod import;
pub mod provider;
pub mod render;
pub mod search;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use hireboard_types::filter::PriceBucket;

/// Browse and maintain a directory of available developers.
#[derive(Parser)]
#[command(name = "hire", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browse session with search and price filters.
    Browse,

    /// Run a single search and print the matching developers.
    Search {
        /// Name or skill to search for.
        #[arg(default_value = "")]
        query: String,

        /// Price bucket: low, medium or high.
        #[arg(short, long)]
        price: Option<PriceBucket>,
    },

    /// Manage provider listings (add, list, show, remove).
    Provider {
        #[command(subcommand)]
        action: provider::ProviderCommand,
    },

    /// Import providers from a JSON array file.
    Import {
        /// Path to the JSON file.
        file: std::path::PathBuf,
    },

    /// Directory status dashboard.
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_parses_price_bucket() {
        let cli = Cli::try_parse_from(["hire", "search", "react", "--price", "Medium"]).unwrap();
        match cli.command {
            Commands::Search { query, price } => {
                assert_eq!(query, "react");
                assert_eq!(price, Some(PriceBucket::Medium));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn search_rejects_unknown_price_bucket() {
        assert!(Cli::try_parse_from(["hire", "search", "--price", "cheap"]).is_err());
    }

    #[test]
    fn search_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["hire", "--json", "search"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Search { ref query, price: None } if query.is_empty()));
    }
}
