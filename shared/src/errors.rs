//! Errors raised while loading or validating configuration.
//!
//! These are fatal at startup only. Nothing in this module is ever
//! surfaced on a per-request path.

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("JWT signing secret must be at least {minimum} bytes, got {actual}")]
    WeakSecret { minimum: usize, actual: usize },
}

impl ConfigError {
    /// Shorthand for a missing environment variable
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Shorthand for a malformed value
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
