//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--base-path <path>]
//! - bookshelf check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book catalog served over HTML forms
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Path the catalog is served under (overrides config file)
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "serve",
            "--port",
            "9000",
            "--base-path",
            "/books",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                base_path,
            } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
                assert_eq!(base_path.as_deref(), Some("/books"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_config_requires_path() {
        assert!(Cli::try_parse_from(["bookshelf", "check-config"]).is_err());
    }
}
