//! # Infrastructure Layer
//!
//! Concrete adapters for the Sigil token engine. The core crate defines the
//! `RevocationStore` and `IpStatusStore` contracts; this crate fulfils them
//! with Redis.

use sigil_core::errors::StoreError;

/// Cache module - Redis client and the stores built on it
pub mod cache;

pub use cache::{RedisClient, RedisIpStatusStore, RedisRevocationStore};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Connection attempt exceeded the configured timeout
    #[error("Cache connection timed out after {0}s")]
    ConnectTimeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
