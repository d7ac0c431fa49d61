//! Database access layer backed by MySQL and SQLx.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};
