//! # CLI Errors
//!
//! Any of these ends the process with exit code 1.

use std::io;

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed, or rejected by validation
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Runtime could not be built or the server stopped with an error
    #[error("server failed to start: {0}")]
    Boot(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::Config("port must be > 0".into()).to_string(),
            "configuration error: port must be > 0"
        );
        assert_eq!(
            CliError::Boot("address in use".into()).to_string(),
            "server failed to start: address in use"
        );
    }

    #[test]
    fn test_json_error_is_io() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        assert!(matches!(CliError::from(json_err), CliError::Io(_)));
    }
}
