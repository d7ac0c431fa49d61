//! Database connection configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Database connection and pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    pub url: String,

    /// Maximum connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Load the database configuration from `DATABASE_URL` and optional
    /// pool tuning variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::missing("DATABASE_URL"))?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "not a valid count")
            })?,
            Err(_) => default_max_connections(),
        };

        Ok(Self {
            url,
            max_connections,
            acquire_timeout_seconds: default_acquire_timeout_seconds(),
        })
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_seconds() -> u64 {
    5
}
