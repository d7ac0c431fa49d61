//! Refresh token repository trait defining the interface for refresh
//! token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for `RefreshToken` persistence operations.
///
/// Records are write-once: they are added at issuance and removed at
/// redemption or pruning, never updated.
///
/// # Security Considerations
/// - Only SHA-256 digests of token values are ever stored or looked up
/// - `take_refresh_token` must be atomic: for a given hash, at most one
///   concurrent caller may receive `Some`. This is what makes a refresh
///   token single-use under concurrent redemption attempts.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g., duplicate hash)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Atomically remove and return the record with the given hash.
    ///
    /// The removal and the read are one operation; two concurrent calls
    /// with the same hash must not both observe the record.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record existed and is now deleted
    /// * `Ok(None)` - No record with the given hash
    /// * `Err(DomainError)` - Storage error occurred
    async fn take_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Find a refresh token record without removing it
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Find all unexpired refresh token records owned by a user.
    ///
    /// A user may hold any number of outstanding records at once, one
    /// per active session.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Delete expired refresh token records
    ///
    /// Called by the periodic cleanup task; correctness of redemption
    /// never depends on it.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;
}
