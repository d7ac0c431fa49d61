//! Repository interfaces for persistence, kept narrow on purpose.
//!
//! The concrete implementations live in the infrastructure layer; the
//! domain only ever sees these traits.

pub mod token;
pub mod user;

pub use token::RefreshTokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use token::MockRefreshTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
