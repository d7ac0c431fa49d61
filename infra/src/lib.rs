//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence traits defined in
//! `hermod_core`, backed by MySQL via SQLx.
//!
//! The session lifecycle depends on this crate only through the
//! `RefreshTokenRepository` and `UserRepository` traits, so the core
//! crate stays free of database concerns.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
