//! HTTP Server Configuration
//!
//! Bind address and the base path the catalog is mounted at.

use serde::{Deserialize, Serialize};

use super::observability_routes::HEALTH_PATH;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the catalog is served under (default: "/livros")
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_path() -> String {
    "/livros".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the values, returning a description of the first problem
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if !self.base_path.starts_with('/') {
            return Err(format!(
                "base_path must start with '/': '{}'",
                self.base_path
            ));
        }
        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(format!(
                "base_path must not end with '/': '{}'",
                self.base_path
            ));
        }
        if self.base_path.chars().any(char::is_whitespace) {
            return Err(format!(
                "base_path must not contain whitespace: '{}'",
                self.base_path
            ));
        }
        if self.base_path.contains(|c: char| c == ':' || c == '*') {
            return Err(format!(
                "base_path must not contain ':' or '*': '{}'",
                self.base_path
            ));
        }
        if self.base_path == HEALTH_PATH {
            return Err(format!("base_path '{}' is reserved", HEALTH_PATH));
        }
        Ok(())
    }
}
