pub mod repository;

pub use repository::RefreshTokenRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockRefreshTokenRepository;
