//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError, Lookup};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port (1-65535)
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Read `API_HOST`, `API_PORT` and `API_WORKERS`
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port: u16 = parse_or(
            lookup,
            "API_PORT",
            defaults.port,
            "expected a port between 1 and 65535",
        )?;
        if port == 0 {
            return Err(ConfigError::Invalid {
                name: "API_PORT",
                value: port.to_string(),
                reason: "expected a port between 1 and 65535",
            });
        }

        Ok(Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port,
            workers: parse_or(lookup, "API_WORKERS", defaults.workers, "expected a worker count")?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
