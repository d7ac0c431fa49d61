//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Refresh token rotation window (one month)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name of the user
    pub name: String,

    /// Email address of the user
    pub email: String,

    /// Role of the user
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, correlating the access token with the refresh record
    /// issued alongside it
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token.
    ///
    /// Expiry is always issued-at plus the configured TTL, independent of
    /// any rotation history.
    pub fn for_user(user: &User, issuer: &str, audience: &str, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user.id.to_string(),
            name: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record persisted in the store.
///
/// A record is created exactly once per issued pair and destroyed exactly
/// once, either by successful redemption or by being found expired during a
/// lookup. It is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// SHA-256 hex digest of the opaque token value; the raw value is
    /// never stored
    pub token_hash: String,

    /// `jti` of the access token issued alongside this record
    pub jti: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record expiring one default rotation
    /// window from now
    pub fn new(user_id: Uuid, token_hash: String, jti: String) -> Self {
        Self::with_validity(user_id, token_hash, jti, REFRESH_TOKEN_EXPIRY_DAYS)
    }

    /// Creates a new refresh token record with an explicit rotation
    /// window
    pub fn with_validity(user_id: Uuid, token_hash: String, jti: String, days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            jti,
            issued_at: now,
            expires_at: now + Duration::days(days),
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque single-use refresh token value
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, access_ttl_minutes: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in: access_ttl_minutes * 60,
        }
    }
}
