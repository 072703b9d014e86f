//! Access list service

use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::domain::entities::ip_status::{IpStatus, IpStatusEntry};
use crate::errors::{AccessListError, StoreError};
use crate::repositories::IpStatusStore;

/// Reads and updates per-address statuses
///
/// Addresses are parsed and stored in canonical form, so `::0001` and `::1`
/// name the same entry.
pub struct AccessListService<S: IpStatusStore> {
    store: S,
    store_timeout: Duration,
}

impl<S: IpStatusStore> AccessListService<S> {
    /// # Arguments
    ///
    /// * `store` - Access list store
    /// * `store_timeout` - Bound applied to every store call
    pub fn new(store: S, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Records a batch of statuses
    ///
    /// Every address is validated before anything is written; one bad
    /// address rejects the whole batch. A later entry for the same address
    /// wins.
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of entries written
    /// * `Err(AccessListError::InvalidAddress)` - An entry is not an IP address
    /// * `Err(AccessListError::StoreUnavailable)` - The write could not be made
    pub async fn set_statuses(
        &self,
        entries: Vec<IpStatusEntry>,
    ) -> Result<usize, AccessListError> {
        let entries = entries
            .into_iter()
            .map(|entry| Ok(IpStatusEntry::new(canonical(&entry.ip)?, entry.status)))
            .collect::<Result<Vec<_>, AccessListError>>()?;

        if entries.is_empty() {
            return Ok(0);
        }

        self.call_store("set", self.store.set_many(&entries)).await?;

        info!("Updated {} access list entries", entries.len());
        Ok(entries.len())
    }

    /// Status of a textual address; `IpStatus::None` when unlisted
    pub async fn status_of(&self, ip: &str) -> Result<IpStatus, AccessListError> {
        let ip: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| AccessListError::InvalidAddress(ip.to_string()))?;
        self.status_of_addr(ip).await
    }

    /// Status of a peer address; `IpStatus::None` when unlisted
    pub async fn status_of_addr(&self, ip: IpAddr) -> Result<IpStatus, AccessListError> {
        let status = self
            .call_store("get", self.store.get(&ip.to_string()))
            .await?
            .unwrap_or(IpStatus::None);
        debug!("Access list status for {}: {:?}", ip, status);
        Ok(status)
    }

    /// Every entry, ordered by address text
    pub async fn list(&self) -> Result<Vec<IpStatusEntry>, AccessListError> {
        let mut entries = self.call_store("list", self.store.list()).await?;
        entries.sort_by(|a, b| a.ip.cmp(&b.ip));
        Ok(entries)
    }

    async fn call_store<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, AccessListError> {
        let result = match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.store_timeout.as_millis() as u64)),
        };

        result.map_err(|e| {
            error!("Access list store {} failed: {}", operation, e);
            AccessListError::from(e)
        })
    }
}

fn canonical(ip: &str) -> Result<String, AccessListError> {
    ip.trim()
        .parse::<IpAddr>()
        .map(|addr| addr.to_string())
        .map_err(|_| AccessListError::InvalidAddress(ip.to_string()))
}
