//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - key material locations and token lifetime
//! - `cache` - revocation store (Redis) connection
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP listener configuration
//!
//! Every section reads itself through a [`Lookup`] so tests can feed values
//! without touching the process environment.

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, KeyConfig, TokenConfig};
pub use cache::{CacheConfig, StoreKind};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Variable reader used by every `from_lookup` constructor
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// Configuration errors reported at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Reads `name` and parses it, falling back to `default` when unset
pub(crate) fn parse_or<T: FromStr>(
    lookup: &Lookup<'_>,
    name: &'static str,
    default: T,
    reason: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw, reason }),
        None => Ok(default),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Key material and token lifetime configuration
    pub auth: AuthConfig,

    /// Revocation store configuration
    pub cache: CacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_lookup(lookup)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup)?,
            auth: AuthConfig::from_lookup(lookup)?,
            cache: CacheConfig::from_lookup(lookup)?,
            logging: LoggingConfig::for_environment(environment),
        })
    }
}
