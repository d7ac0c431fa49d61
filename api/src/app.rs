//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use hermod_core::repositories::{RefreshTokenRepository, UserRepository};
use hermod_core::services::auth::AuthService;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, refresh::refresh};

/// Application state that holds shared services
pub struct AppState<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, R>(
    app_state: web::Data<AppState<U, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<U, R>))
                    .route("/refresh", web::post().to(refresh::<U, R>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hermod-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
