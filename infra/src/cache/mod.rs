//! Cache module for Redis-based storage
//!
//! Provides the Redis client and the revocation and access list stores built
//! on it.

pub mod ip_status_store;
pub mod redis_client;
pub mod revocation_store;


pub use ip_status_store::RedisIpStatusStore;
pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use sigil_shared::CacheConfig;
