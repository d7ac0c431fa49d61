//! Authentication request and response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use hermod_core::domain::entities::token::TokenPair;

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Token pair returned by login and refresh.
///
/// The refresh value is also set as an HTTP-only cookie; it appears in
/// the body as well so that non-browser clients can store it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }
    }
}
