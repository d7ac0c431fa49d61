//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use token::{TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig};
