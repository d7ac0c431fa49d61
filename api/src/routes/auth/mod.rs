//! Authentication route handlers
//!
//! - Login with username and password
//! - Refresh token rotation
//!
//! Both endpoints manage the `refreshToken` HTTP-only cookie: login
//! sets it, refresh rewrites it with the newly rotated value.

pub mod login;
pub mod refresh;

use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// Name of the cookie carrying the opaque refresh token value
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Build the HTTP-only refresh token cookie.
///
/// The cookie lifetime mirrors the rotation window, so the browser
/// drops the value at the same time the server-side record expires.
fn refresh_cookie(value: &str, validity_days: i64) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, value.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::days(validity_days))
        .finish()
}
