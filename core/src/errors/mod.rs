//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. A single opaque reason on
    /// purpose: the two cases must not be distinguishable by a caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email address has not been confirmed")]
    EmailNotConfirmed,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// No refresh token was presented at all
    #[error("No refresh token provided")]
    MissingRefreshToken,

    /// Unknown, already-redeemed, or expired refresh token. Expiry is
    /// deliberately not surfaced as a distinct reason.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Access token failed signature or claim validation
    #[error("Invalid access token")]
    InvalidAccessToken,

    /// Access token is past its expiry
    #[error("Access token expired")]
    AccessTokenExpired,

    /// Token construction or signing failed
    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
