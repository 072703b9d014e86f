//! Revocation store configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError, Lookup};

/// Backend holding revocation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Redis via `REDIS_URL`
    Redis,
    /// Process-local map, for development without Redis
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(StoreKind::Redis),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(format!("Invalid store kind: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Enable cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Which backend to use
    pub store: StoreKind,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            connection_timeout: 5,
            key_prefix: None,
            store: StoreKind::Redis,
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Read `REDIS_URL`, `REDIS_CONNECT_TIMEOUT`, `REDIS_KEY_PREFIX` and `REVOCATION_STORE`
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            url: lookup("REDIS_URL").unwrap_or(defaults.url),
            connection_timeout: parse_or(
                lookup,
                "REDIS_CONNECT_TIMEOUT",
                defaults.connection_timeout,
                "expected a number of seconds",
            )?,
            key_prefix: lookup("REDIS_KEY_PREFIX").filter(|prefix| !prefix.is_empty()),
            store: parse_or(
                lookup,
                "REVOCATION_STORE",
                defaults.store,
                "expected redis or memory",
            )?,
        })
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}
