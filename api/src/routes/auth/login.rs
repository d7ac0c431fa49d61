//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use hermod_core::repositories::{RefreshTokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use super::refresh_cookie;

/// Authenticates a user and issues an access/refresh token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The token pair as JSON, plus a `refreshToken` HTTP-only cookie whose
/// lifetime equals the refresh rotation window.
///
/// ## Errors
/// - 400 Bad Request: Malformed request body
/// - 401 Unauthorized: Unknown username, wrong password, or unconfirmed email
pub async fn login<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", errors.to_string()));
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(pair) => {
            let cookie = refresh_cookie(&pair.refresh_token, state.auth_service.refresh_expiry_days());

            HttpResponse::Ok()
                .cookie(cookie)
                .json(TokenResponse::from(pair))
        }
        Err(error) => handle_domain_error(error),
    }
}
