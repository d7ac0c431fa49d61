//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenRepository, UserRepository};

use super::config::TokenServiceConfig;

/// Length of the opaque refresh token value. 32 alphanumeric characters
/// carry roughly 190 bits of entropy, comfortably past unguessable.
const OPAQUE_TOKEN_LENGTH: usize = 32;

/// Minimum acceptable signing secret length in bytes
const MIN_SECRET_BYTES: usize = 32;

/// Service for issuing and rotating access/refresh token pairs.
///
/// This is the only component that produces token pairs. It holds no
/// mutable state of its own; the keys and configuration are fixed at
/// construction and the persistence store is behind
/// [`RefreshTokenRepository`].
pub struct TokenService<R: RefreshTokenRepository, U: UserRepository> {
    repository: Arc<R>,
    user_repository: Arc<U>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RefreshTokenRepository, U: UserRepository> std::fmt::Debug for TokenService<R, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl<R: RefreshTokenRepository, U: UserRepository> TokenService<R, U> {
    /// Creates a new token service instance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` when the signing secret is
    /// too short. This is checked here so that a misconfigured secret
    /// aborts boot instead of failing requests.
    pub fn new(
        repository: Arc<R>,
        user_repository: Arc<U>,
        config: TokenServiceConfig,
    ) -> Result<Self, DomainError> {
        if config.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(DomainError::Configuration {
                message: format!(
                    "JWT secret must be at least {MIN_SECRET_BYTES} bytes, got {}",
                    config.jwt_secret.len()
                ),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Ok(Self {
            repository,
            user_repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a fresh access/refresh pair for a resolved user.
    ///
    /// Every call signs a new access token with a fresh `jti`, persists a
    /// new refresh record linked to that `jti`, and returns the raw
    /// refresh value. A persistence failure propagates; the caller must
    /// treat it as "try again later", never as a usable pair.
    pub async fn generate_tokens(&self, user: &User) -> DomainResult<TokenPair> {
        let claims = Claims::for_user(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_minutes,
        );
        let access_token = self.encode_jwt(&claims)?;

        let refresh_value = generate_opaque_token();
        let record = RefreshToken::with_validity(
            user.id,
            hash_token(&refresh_value),
            claims.jti,
            self.config.refresh_token_expiry_days,
        );
        self.repository.save_refresh_token(record).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_value,
            self.config.access_token_expiry_minutes,
        ))
    }

    /// Redeems a refresh token and rotates it.
    ///
    /// The record is claimed atomically from the store before any
    /// replacement is generated, so the presented value is single-use
    /// even when generation fails afterwards: the caller is forced to
    /// re-authenticate rather than retry a stale value.
    ///
    /// Unknown, already-redeemed, and expired values all fail with
    /// `InvalidRefreshToken`; the distinction is logged but never
    /// surfaced, to avoid handing probes an oracle.
    pub async fn verify_and_rotate(&self, refresh_value: &str) -> DomainResult<TokenPair> {
        let token_hash = hash_token(refresh_value);

        let record = match self.repository.take_refresh_token(&token_hash).await? {
            Some(record) => record,
            None => return Err(TokenError::InvalidRefreshToken.into()),
        };

        if record.is_expired() {
            // Already removed by the take; nothing left to prune.
            debug!(user_id = %record.user_id, "rejected expired refresh token");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        self.generate_tokens(&user).await
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Checks the signature, expiry, issuer, and audience.
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::AccessTokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidAccessToken)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Rotation window in days, as configured; the refresh cookie
    /// lifetime mirrors this
    pub fn refresh_expiry_days(&self) -> i64 {
        self.config.refresh_token_expiry_days
    }

    /// Encodes claims into a signed JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

}

/// Hashes a refresh token value for storage and lookup
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generates a fresh opaque refresh token value
fn generate_opaque_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(OPAQUE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
