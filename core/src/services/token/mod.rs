//! Token service module for the session/token lifecycle
//!
//! This module is the sole producer of access/refresh pairs and the sole
//! arbiter of rotation correctness:
//! - JWT access token generation and verification
//! - Single-use refresh token issuance and rotation
//! - Background cleanup of expired refresh records

mod cleanup;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use service::TokenService;
