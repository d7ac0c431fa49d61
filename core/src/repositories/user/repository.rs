//! User repository trait defining the interface for user lookups.
//!
//! Registration and profile management live elsewhere; the session
//! lifecycle only ever needs to resolve an existing user.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for `User` lookup operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
