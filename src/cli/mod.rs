//! CLI module for Bookshelf
//!
//! Provides command-line interface for:
//! - serve: Start the catalog HTTP server
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, init_logging, load_config, run, run_command, serve, ConfigOverrides};
pub use errors::{CliError, CliResult};
