//! CLI command implementations

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Flag values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub base_path: Option<String>,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            base_path,
        } => {
            let overrides = ConfigOverrides {
                host,
                port,
                base_path,
            };
            serve(config.as_deref(), overrides)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build the effective configuration.
///
/// Starts from defaults, applies the JSON file when given, then the flag
/// overrides, and validates the result.
pub fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::Config(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::Config(format!("invalid JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(base_path) = overrides.base_path {
        config.base_path = base_path;
    }

    config.validate().map_err(CliError::Config)?;

    Ok(config)
}

/// Start the catalog server and block until it shuts down
pub fn serve(config_path: Option<&Path>, overrides: ConfigOverrides) -> CliResult<()> {
    init_logging();

    let config = load_config(config_path, overrides)?;
    info!(addr = %config.socket_addr(), base_path = %config.base_path, "starting bookshelf");

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(e.to_string()))
    })
}

/// Validate a config file and print the effective settings as JSON
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = load_config(Some(config_path), ConfigOverrides::default())?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;

    Ok(())
}
