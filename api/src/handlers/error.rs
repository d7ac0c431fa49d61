//! Translation of domain errors into HTTP responses.
//!
//! Every handler funnels failures through `handle_domain_error` so the
//! status codes and error codes stay consistent across the API. Token
//! and credential failures all map to 401 without detail: the response
//! must not reveal whether a token was unknown, expired, or replayed.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use hermod_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a `DomainError` into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Configuration { message } => {
            tracing::error!("configuration error: {}", message);
            internal_error()
        }
        DomainError::Internal { message } => {
            tracing::error!("internal error: {}", message);
            internal_error()
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_credentials",
            "Invalid username or password",
        )),
        AuthError::EmailNotConfirmed => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "email_not_confirmed",
            "Email address has not been confirmed",
        )),
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    match error {
        TokenError::MissingRefreshToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "missing_refresh_token",
            "No refresh token provided",
        )),
        TokenError::InvalidRefreshToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_refresh_token",
            "Invalid refresh token",
        )),
        TokenError::InvalidAccessToken | TokenError::AccessTokenExpired => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                "invalid_access_token",
                "Invalid or expired access token",
            ))
        }
        TokenError::TokenGenerationFailed => {
            tracing::error!("token generation failed");
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    ErrorResponse::new("internal_error", "An internal error occurred")
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}
