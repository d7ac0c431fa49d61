pub mod repository;

pub use repository::UserRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockUserRepository;
