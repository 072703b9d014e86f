//! Shared configuration types for the Sigil token service
//!
//! Every crate in the workspace reads its settings from here:
//! key paths, token lifetime, revocation store and HTTP listener.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, ConfigError, Environment, KeyConfig, LogFormat,
    LoggingConfig, ServerConfig, StoreKind, TokenConfig,
};
