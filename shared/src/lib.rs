//! # Hermod Shared
//!
//! Configuration types shared across the Hermod backend crates.
//! Business logic lives in `hermod_core`; this crate only carries
//! plain configuration structs and the errors raised while loading them.

pub mod config;
pub mod errors;

pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use errors::ConfigError;
