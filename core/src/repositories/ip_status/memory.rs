//! In-memory implementation of IpStatusStore

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::ip_status::{IpStatus, IpStatusEntry};
use crate::errors::StoreError;

use super::r#trait::IpStatusStore;

/// Process-local access list
#[derive(Debug, Default)]
pub struct MemoryIpStatusStore {
    entries: RwLock<HashMap<String, IpStatus>>,
}

impl MemoryIpStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl IpStatusStore for MemoryIpStatusStore {
    async fn set_many(&self, entries: &[IpStatusEntry]) -> Result<(), StoreError> {
        let mut map = self.entries.write().await;
        for entry in entries {
            map.insert(entry.ip.clone(), entry.status);
        }
        Ok(())
    }

    async fn get(&self, ip: &str) -> Result<Option<IpStatus>, StoreError> {
        Ok(self.entries.read().await.get(ip).copied())
    }

    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(|(ip, status)| IpStatusEntry::new(ip.clone(), *status))
            .collect())
    }
}
