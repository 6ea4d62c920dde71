//! Periodic sweep of expired token records
//!
//! Expired rows are removed by a background task decoupled from the request
//! path. The sweep is idempotent and safe to run concurrently with token
//! issuance; its failures are logged and swallowed because cleanup must
//! never affect authentication.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for the token sweep task
#[derive(Debug, Clone)]
pub struct TokenSweepConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for TokenSweepConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Background task deleting expired token records
pub struct TokenSweepTask<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenSweepConfig,
}

impl<R: TokenRepository> TokenSweepTask<R> {
    /// Create a new sweep task
    pub fn new(repository: Arc<R>, config: TokenSweepConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    /// * `Err(DomainError)` - If the delete itself fails
    pub async fn run_once(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired().await
    }

    /// Start the sweep as a background task
    ///
    /// Spawns a tokio task that sweeps at the configured interval.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("token sweep task is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "token sweep task started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_once().await {
                    Ok(0) => {}
                    Ok(deleted) => {
                        info!("deleted {} expired access tokens", deleted);
                    }
                    Err(e) => {
                        error!("token sweep failed: {}", e);
                    }
                }
            }
        });
    }
}
