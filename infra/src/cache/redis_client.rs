//! Redis client implementation
//!
//! A thin async client over a multiplexed connection. Connecting retries with
//! exponential backoff; individual commands do not retry, since callers bound
//! every call with their own timeout.

use std::collections::HashMap;
use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError};
use sigil_shared::CacheConfig;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use crate::InfrastructureError;

/// Redis client with connection retry
///
/// Cloning is cheap and shares the underlying multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Connect using `config`, retrying transient failures three times
    ///
    /// # Example
    /// ```no_run
    /// use sigil_infra::cache::RedisClient;
    /// use sigil_shared::CacheConfig;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    /// Connect with custom retry parameters
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    /// * `max_retries` - Maximum number of connection attempts
    /// * `retry_delay_ms` - Base delay between attempts in milliseconds
    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connect_timeout = Duration::from_secs(config.connection_timeout.max(1));
        let connection =
            Self::create_connection_with_retry(client, connect_timeout, max_retries, retry_delay_ms)
                .await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        connect_timeout: Duration,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let attempt = timeout(connect_timeout, client.get_multiplexed_async_connection());
            let failure = match attempt.await {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) if !is_retriable_error(&e) => {
                    error!("Failed to connect to Redis: {}", e);
                    return Err(InfrastructureError::Cache(e));
                }
                Ok(Err(e)) => InfrastructureError::Cache(e),
                Err(_) => InfrastructureError::ConnectTimeout(connect_timeout.as_secs()),
            };

            if attempts >= max_retries {
                error!("Failed to connect to Redis after {} attempts: {}", attempts, failure);
                return Err(failure);
            }

            warn!(
                "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, max_retries, failure, delay
            );
            sleep(Duration::from_millis(delay)).await;
            // Exponential backoff with cap at 5 seconds
            delay = (delay * 2).min(5000);
        }
    }

    /// Set a value with expiration time
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store
    /// * `expiry_seconds` - Time to live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("Failed to set key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Get a value, `None` if the key is missing or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let mut conn = self.connection.clone();
        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("Failed to get key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key, returning whether it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let mut conn = self.connection.clone();
        let deleted_count = conn.del::<_, u32>(key).await.map_err(|e| {
            error!("Failed to delete key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })?;

        Ok(deleted_count > 0)
    }

    /// Get time-to-live for a key
    ///
    /// # Returns
    /// * `Ok(Some(seconds))` - Key exists with an expiry
    /// * `Ok(None)` - Key doesn't exist or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let ttl = conn.ttl::<_, i64>(key).await.map_err(|e| {
            error!("Failed to get TTL for key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })?;

        Ok((ttl >= 0).then_some(ttl))
    }

    /// Set several fields of a hash in one `HSET`
    pub async fn hash_set_many(
        &self,
        key: &str,
        fields: &[(String, String)],
    ) -> Result<(), InfrastructureError> {
        debug!("Setting {} fields of hash '{}'", fields.len(), key);

        let mut conn = self.connection.clone();
        conn.hset_multiple::<_, _, _, ()>(key, fields)
            .await
            .map_err(|e| {
                error!("Failed to set fields of hash '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Get one field of a hash, `None` if the hash or field is missing
    pub async fn hash_get(
        &self,
        key: &str,
        field: &str,
    ) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting field '{}' of hash '{}'", field, key);

        let mut conn = self.connection.clone();
        conn.hget::<_, _, Option<String>>(key, field)
            .await
            .map_err(|e| {
                error!("Failed to get field '{}' of hash '{}': {}", field, key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Get every field of a hash
    pub async fn hash_get_all(
        &self,
        key: &str,
    ) -> Result<HashMap<String, String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.hgetall::<_, HashMap<String, String>>(key)
            .await
            .map_err(|e| {
                error!("Failed to read hash '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) if response == "PONG" => Ok(true),
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Configuration this client was created with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

/// Whether a connection error is transient and worth another attempt
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let (Some(at_pos), Some(proto_end)) = (url.rfind('@'), url.find("://")) {
        if at_pos > proto_end {
            return format!("{}****{}", &url[..proto_end + 3], &url[at_pos..]);
        }
    }
    url.to_string()
}
