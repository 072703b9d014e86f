//! Access list store trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::ip_status::{IpStatus, IpStatusEntry};
use crate::errors::StoreError;

/// Persistent map from IP address to [`IpStatus`]
///
/// Entries never expire. Addresses arrive already normalised by the caller.
#[async_trait]
pub trait IpStatusStore: Send + Sync {
    /// Write every entry in one round trip, overwriting existing ones
    async fn set_many(&self, entries: &[IpStatusEntry]) -> Result<(), StoreError>;

    /// Status recorded for `ip`, `Ok(None)` if there is none
    async fn get(&self, ip: &str) -> Result<Option<IpStatus>, StoreError>;

    /// Every recorded entry, in no particular order
    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError>;
}

#[async_trait]
impl<S: IpStatusStore + ?Sized> IpStatusStore for Arc<S> {
    async fn set_many(&self, entries: &[IpStatusEntry]) -> Result<(), StoreError> {
        (**self).set_many(entries).await
    }

    async fn get(&self, ip: &str) -> Result<Option<IpStatus>, StoreError> {
        (**self).get(ip).await
    }

    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError> {
        (**self).list().await
    }
}
