//! Redis-backed revocation store
//!
//! One key per revoked token, `revoked:{token_id}` under the configured
//! prefix, written with `SET .. EX` so Redis drops it once the token would
//! have expired anyway.

use async_trait::async_trait;
use sigil_core::errors::StoreError;
use sigil_core::repositories::RevocationStore;
use sigil_shared::CacheConfig;
use tracing::debug;

use super::redis_client::RedisClient;

/// Namespace for revocation keys
const REVOKED_NAMESPACE: &str = "revoked";

/// Revocation store on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Full Redis key for a token id
    pub fn revocation_key(&self, token_id: &str) -> String {
        revocation_key(self.client.config(), token_id)
    }

    /// Underlying client
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn get(&self, token_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.client.get(&self.revocation_key(token_id)).await?)
    }

    async fn set_with_ttl(
        &self,
        token_id: &str,
        marker: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        let key = self.revocation_key(token_id);
        self.client.set_with_expiry(&key, marker, ttl_seconds).await?;
        debug!("Stored revocation marker under '{}'", key);
        Ok(())
    }

    async fn delete(&self, token_id: &str) -> Result<bool, StoreError> {
        Ok(self.client.delete(&self.revocation_key(token_id)).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match self.client.health_check().await? {
            true => Ok(()),
            false => Err(StoreError::Unavailable(
                "unexpected PING response".to_string(),
            )),
        }
    }
}

pub(crate) fn revocation_key(config: &CacheConfig, token_id: &str) -> String {
    config.make_key(&format!("{}:{}", REVOKED_NAMESPACE, token_id))
}
