//! Periodic purge of lapsed revocation entries
//!
//! Stores with native expiry (Redis) report nothing to purge; the in-memory
//! store relies on this sweeper to keep its map bounded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::errors::StoreError;
use crate::repositories::RevocationStore;

/// Configuration for the revocation sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

/// Background task purging lapsed entries from a revocation store
pub struct RevocationSweeper<S: RevocationStore + 'static> {
    store: S,
    config: SweeperConfig,
}

impl<S: RevocationStore> RevocationSweeper<S> {
    /// Create a new sweeper over `store`
    pub fn new(store: S, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep
    pub async fn run_once(&self) -> Result<SweepResult, StoreError> {
        if !self.config.enabled {
            return Ok(SweepResult::default());
        }

        let purged = self.store.purge_expired().await?;
        if purged > 0 {
            info!("Purged {} lapsed revocation entries", purged);
        } else {
            debug!("Revocation sweep found nothing to purge");
        }

        Ok(SweepResult { purged })
    }

    /// Start the sweeper as a background task
    ///
    /// Spawns a tokio task that sweeps at the configured interval until the
    /// runtime shuts down.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Revocation sweeper is disabled");
            return;
        }

        let interval = Duration::from_secs(self.config.interval_seconds.max(1));

        tokio::spawn(async move {
            info!(
                "Revocation sweeper started - will run every {} seconds",
                interval.as_secs()
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_once().await {
                    error!("Revocation sweep failed: {}", e);
                }
            }
        });
    }
}

/// Result of a sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of lapsed entries removed
    pub purged: usize,
}
