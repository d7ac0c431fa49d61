//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Load the server configuration from `SERVER_HOST` / `SERVER_PORT` /
    /// `SERVER_WORKERS`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("SERVER_PORT", "not a valid port number"))?,
            Err(_) => defaults.port,
        };
        let workers = match std::env::var("SERVER_WORKERS") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::invalid("SERVER_WORKERS", "not a valid count"))?,
            Err(_) => defaults.workers,
        };

        Ok(Self { host, port, workers })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
            workers: 4,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }
}
