//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{Claims, RefreshToken, TokenPair, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::{Role, User};
