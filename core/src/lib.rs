//! # Hermod Core
//!
//! Core business logic and domain layer for the Hermod messenger backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. The session/token lifecycle lives in
//! [`services::token`]; everything else consumes it through the narrow
//! repository traits in [`repositories`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
