//! Main authentication service implementation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::token::TokenService;

/// Authentication service for the login and refresh flows.
///
/// Validates credentials against the user store and hands every token
/// decision to the [`TokenService`], which is the sole producer of
/// access/refresh pairs.
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for issuing and rotating pairs
    token_service: Arc<TokenService<R, U>>,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<R, U>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Validate a username/password pair and issue a fresh token pair.
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// `InvalidCredentials`; the two cases are indistinguishable to the
    /// caller. Users who never confirmed their email are rejected even
    /// with a correct password.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.email_confirmed {
            return Err(AuthError::EmailNotConfirmed.into());
        }

        let pair = self.token_service.generate_tokens(&user).await?;
        info!(user_id = %user.id, username = %user.username, "user logged in");
        Ok(pair)
    }

    /// Redeem a refresh token for a new pair, rotating it
    pub async fn refresh(&self, refresh_value: &str) -> DomainResult<TokenPair> {
        self.token_service.verify_and_rotate(refresh_value).await
    }

    /// Rotation window in days; the refresh cookie lifetime mirrors this
    pub fn refresh_expiry_days(&self) -> i64 {
        self.token_service.refresh_expiry_days()
    }
}
