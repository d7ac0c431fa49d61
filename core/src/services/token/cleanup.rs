//! Periodic cleanup of expired refresh token records.
//!
//! Expired records are pruned when a redemption attempt touches them, so
//! redemption correctness never depends on this task; it only keeps
//! records that are expired but never looked up from accumulating.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RefreshTokenRepository;

/// Configuration for the token cleanup task
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the task at all
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Background sweeper for expired refresh token records
pub struct TokenCleanupService<R: RefreshTokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: RefreshTokenRepository> TokenCleanupService<R> {
    /// Create a new cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    /// * `Err(DomainError)` - Cleanup failed; safe to retry next cycle
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        let deleted = self.repository.delete_expired_tokens().await?;
        if deleted > 0 {
            info!("Deleted {} expired refresh tokens", deleted);
        }
        Ok(deleted)
    }

    /// Start the cleanup service as a background task
    ///
    /// Spawns a tokio task that runs cleanup at regular intervals until
    /// the process exits.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup task is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Token cleanup task started, running every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Token cleanup cycle failed: {}", e);
                }
            }
        });
    }
}
