//! Configuration for the token service

use hermod_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Constructed once at startup and never mutated; safe to share across
/// any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared secret for HS256 signing
    pub jwt_secret: String,
    /// Issuer claim stamped into and required of every access token
    pub issuer: String,
    /// Audience claim stamped into and required of every access token
    pub audience: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token rotation window in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "hermod".to_string(),
            audience: "hermod-api".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
        }
    }
}
