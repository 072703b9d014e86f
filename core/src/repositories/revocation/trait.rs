//! Revocation store trait defining the capability the token engine needs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value store with per-entry expiry, keyed by token id
///
/// The engine only ever writes a marker for explicitly revoked tokens and
/// reads it back on verification. Implementations must provide atomic
/// per-key semantics; the engine holds no locks of its own.
///
/// # Failure semantics
/// - A missing entry is `Ok(None)`, never an error
/// - Network failures surface as `StoreError::Unavailable`
/// - Implementations should not retry internally; the caller bounds every
///   call with a timeout and owns the retry policy
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Read the marker stored for `token_id`
    ///
    /// # Returns
    /// * `Ok(Some(marker))` - Entry exists and has not expired
    /// * `Ok(None)` - No live entry
    /// * `Err(StoreError)` - Store could not be reached
    async fn get(&self, token_id: &str) -> Result<Option<String>, StoreError>;

    /// Write `marker` for `token_id`, expiring after `ttl_seconds`
    ///
    /// Overwrites any existing entry.
    async fn set_with_ttl(
        &self,
        token_id: &str,
        marker: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError>;

    /// Remove the entry for `token_id`
    ///
    /// # Returns
    /// * `Ok(true)` - Entry was removed
    /// * `Ok(false)` - No entry existed
    async fn delete(&self, token_id: &str) -> Result<bool, StoreError>;

    /// Liveness probe
    async fn ping(&self) -> Result<(), StoreError>;

    /// Drop entries whose TTL has elapsed
    ///
    /// Stores with native expiry (Redis) have nothing to do here.
    async fn purge_expired(&self) -> Result<usize, StoreError> {
        Ok(0)
    }
}

#[async_trait]
impl<S: RevocationStore + ?Sized> RevocationStore for Arc<S> {
    async fn get(&self, token_id: &str) -> Result<Option<String>, StoreError> {
        (**self).get(token_id).await
    }

    async fn set_with_ttl(
        &self,
        token_id: &str,
        marker: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        (**self).set_with_ttl(token_id, marker, ttl_seconds).await
    }

    async fn delete(&self, token_id: &str) -> Result<bool, StoreError> {
        (**self).delete(token_id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        (**self).ping().await
    }

    async fn purge_expired(&self) -> Result<usize, StoreError> {
        (**self).purge_expired().await
    }
}
