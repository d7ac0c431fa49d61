//! Handler for POST /api/v1/auth/refresh

use actix_web::{web, HttpRequest, HttpResponse};

use hermod_core::errors::TokenError;
use hermod_core::repositories::{RefreshTokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::TokenResponse;
use crate::handlers::error::handle_domain_error;

use super::{refresh_cookie, REFRESH_COOKIE_NAME};

/// Rotates a refresh token and issues a fresh token pair.
///
/// Takes no body; the opaque refresh value is read from the
/// `refreshToken` HTTP-only cookie set at login. A request without the
/// cookie is rejected before the token service is ever consulted.
///
/// # Response
///
/// ## Success (200 OK)
/// A new token pair as JSON; the `refreshToken` cookie is rewritten
/// with the newly issued value. The presented value is spent either
/// way and can never be redeemed again.
///
/// ## Errors
/// - 401 Unauthorized: Missing cookie, or an unknown/expired/replayed value
pub async fn refresh<U, R>(req: HttpRequest, state: web::Data<AppState<U, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
{
    let Some(cookie) = req.cookie(REFRESH_COOKIE_NAME) else {
        return handle_domain_error(TokenError::MissingRefreshToken.into());
    };

    match state.auth_service.refresh(cookie.value()).await {
        Ok(pair) => {
            let cookie = refresh_cookie(&pair.refresh_token, state.auth_service.refresh_expiry_days());

            HttpResponse::Ok()
                .cookie(cookie)
                .json(TokenResponse::from(pair))
        }
        Err(error) => handle_domain_error(error),
    }
}
