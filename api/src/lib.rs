//! # API Layer
//!
//! HTTP surface of the Hermod messenger backend, built on Actix-web.
//!
//! Handlers stay thin: they parse the request, call into the services
//! from `hermod_core`, and translate `DomainError` values into JSON
//! error responses. Session state never lives here.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
