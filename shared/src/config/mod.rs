//! Configuration module with business-specific sub-modules
//!
//! Configuration is split into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server configuration
//!
//! All values are read once at startup and treated as immutable afterwards.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use crate::errors::ConfigError;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Fails fast: any missing or malformed value aborts startup rather
    /// than surfacing later on a request path.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
        })
    }
}
