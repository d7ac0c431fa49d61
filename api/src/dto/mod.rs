//! Data transfer objects for requests and responses

pub mod auth;
pub mod error;

pub use auth::{LoginRequest, TokenResponse};
pub use error::ErrorResponse;
