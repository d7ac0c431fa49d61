//! Hermod API server entry point.
//!
//! Wires configuration, the MySQL pool, repositories and services
//! together, starts the background token sweeper and serves the HTTP
//! API.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hermod_api::app::{create_app, AppState};
use hermod_core::services::auth::AuthService;
use hermod_core::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};
use hermod_infra::database::connection::DatabasePool;
use hermod_infra::database::mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};
use hermod_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("starting hermod api server");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let pool = match DatabasePool::new(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("failed to connect to database: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e));
        }
    };

    match pool.health_check().await {
        Ok(true) => info!("database connectivity verified"),
        Ok(false) => error!("database health probe returned an unexpected result"),
        Err(e) => error!("database health probe failed: {}", e),
    }

    let token_repository = Arc::new(MySqlRefreshTokenRepository::new(pool.get_pool().clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));

    // A weak signing secret aborts boot here rather than failing requests.
    let token_service = match TokenService::new(
        token_repository.clone(),
        user_repository.clone(),
        TokenServiceConfig::from(&config.jwt),
    ) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("failed to initialize token service: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let auth_service = Arc::new(AuthService::new(user_repository, token_service));

    let cleanup = Arc::new(TokenCleanupService::new(
        token_repository,
        TokenCleanupConfig::default(),
    ));
    cleanup.start_background_task();

    let bind_address = config.server.bind_address();
    info!("server listening on {}", bind_address);

    let mut server = HttpServer::new(move || {
        let app_state = web::Data::new(AppState {
            auth_service: auth_service.clone(),
        });
        create_app(app_state)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
