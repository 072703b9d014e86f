//! In-memory implementation of RevocationStore
//!
//! Entries carry a deadline instead of relying on a background expiry. A
//! lapsed entry is invisible to `get` immediately and is physically removed
//! by `purge_expired` (see `RevocationSweeper`).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::StoreError;

use super::r#trait::RevocationStore;

#[derive(Debug, Clone)]
struct Entry {
    marker: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local revocation store
#[derive(Debug, Default)]
pub struct MemoryRevocationStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryRevocationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, including lapsed ones not yet purged
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Remaining lifetime of a live entry
    pub async fn ttl(&self, token_id: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .get(token_id)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.expires_at - now)
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn get(&self, token_id: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(token_id)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.marker.clone()))
    }

    async fn set_with_ttl(
        &self,
        token_id: &str,
        marker: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        let entry = Entry {
            marker: marker.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        self.entries.write().await.insert(token_id.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, token_id: &str) -> Result<bool, StoreError> {
        Ok(self.entries.write().await.remove(token_id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        Ok(before - entries.len())
    }
}
