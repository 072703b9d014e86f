//! Redis-backed access list
//!
//! All statuses live in a single hash, `status_list` under the configured
//! prefix, mapping each address to its numeric status code.

use async_trait::async_trait;
use sigil_core::domain::{IpStatus, IpStatusEntry};
use sigil_core::errors::StoreError;
use sigil_core::repositories::IpStatusStore;
use sigil_shared::CacheConfig;
use tracing::warn;

use super::redis_client::RedisClient;

/// Name of the access list hash
const STATUS_LIST: &str = "status_list";

/// Access list store on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisIpStatusStore {
    client: RedisClient,
}

impl RedisIpStatusStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Full Redis key of the access list hash
    pub fn status_list_key(&self) -> String {
        status_list_key(self.client.config())
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl IpStatusStore for RedisIpStatusStore {
    async fn set_many(&self, entries: &[IpStatusEntry]) -> Result<(), StoreError> {
        let fields: Vec<(String, String)> = entries
            .iter()
            .map(|entry| (entry.ip.clone(), entry.status.code().to_string()))
            .collect();
        self.client
            .hash_set_many(&self.status_list_key(), &fields)
            .await?;
        Ok(())
    }

    async fn get(&self, ip: &str) -> Result<Option<IpStatus>, StoreError> {
        let raw = self.client.hash_get(&self.status_list_key(), ip).await?;
        Ok(raw.map(|value| decode_status(ip, &value)))
    }

    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError> {
        let raw = self.client.hash_get_all(&self.status_list_key()).await?;
        Ok(raw
            .into_iter()
            .map(|(ip, value)| {
                let status = decode_status(&ip, &value);
                IpStatusEntry::new(ip, status)
            })
            .collect())
    }
}

pub(crate) fn status_list_key(config: &CacheConfig) -> String {
    config.make_key(STATUS_LIST)
}

/// Stored code to status; anything unreadable counts as no entry
pub(crate) fn decode_status(ip: &str, value: &str) -> IpStatus {
    match value.parse::<i8>() {
        Ok(code) => IpStatus::from_code(code),
        Err(_) => {
            warn!("Ignoring unreadable access list value for {}: {:?}", ip, value);
            IpStatus::None
        }
    }
}
