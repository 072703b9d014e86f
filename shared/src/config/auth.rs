//! Key material and token lifetime configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError, Lookup};

/// Locations of the PEM-encoded RSA key pair
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyConfig {
    /// Path to the private (signing) key
    pub private_key_path: PathBuf,

    /// Path to the public (verification) key
    pub public_key_path: PathBuf,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from("keys/private_key.pem"),
            public_key_path: PathBuf::from("keys/public_key.pem"),
        }
    }
}

impl KeyConfig {
    /// Read `PRIVATE_KEY_PATH` and `PUBLIC_KEY_PATH`
    pub fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            private_key_path: lookup("PRIVATE_KEY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.private_key_path),
            public_key_path: lookup("PUBLIC_KEY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_key_path),
        }
    }
}

/// Token lifetime settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Seconds added to the issue time to form the expiry
    pub expiry_seconds: i64,

    /// Seconds of clock skew tolerated at the expiry check
    #[serde(default)]
    pub leeway_seconds: i64,

    /// Upper bound on a single revocation store call, in milliseconds
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: 3600,
            leeway_seconds: 0,
            store_timeout_ms: default_store_timeout_ms(),
        }
    }
}

impl TokenConfig {
    /// Create a token configuration with the given expiry
    pub fn with_expiry(expiry_seconds: i64) -> Self {
        Self {
            expiry_seconds,
            ..Default::default()
        }
    }

    /// Read `TOKEN_EXPIRY`, `TOKEN_LEEWAY` and `STORE_TIMEOUT_MS`
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let expiry_seconds: i64 = parse_or(
            lookup,
            "TOKEN_EXPIRY",
            defaults.expiry_seconds,
            "expected a positive number of seconds",
        )?;
        if expiry_seconds <= 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_EXPIRY",
                value: expiry_seconds.to_string(),
                reason: "expected a positive number of seconds",
            });
        }

        let leeway_seconds: i64 = parse_or(
            lookup,
            "TOKEN_LEEWAY",
            defaults.leeway_seconds,
            "expected a non-negative number of seconds",
        )?;
        if leeway_seconds < 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_LEEWAY",
                value: leeway_seconds.to_string(),
                reason: "expected a non-negative number of seconds",
            });
        }

        let store_timeout_ms: u64 = parse_or(
            lookup,
            "STORE_TIMEOUT_MS",
            defaults.store_timeout_ms,
            "expected a positive number of milliseconds",
        )?;
        if store_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                name: "STORE_TIMEOUT_MS",
                value: store_timeout_ms.to_string(),
                reason: "expected a positive number of milliseconds",
            });
        }

        Ok(Self {
            expiry_seconds,
            leeway_seconds,
            store_timeout_ms,
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Key pair locations
    pub keys: KeyConfig,

    /// Token lifetime settings
    pub token: TokenConfig,
}

impl AuthConfig {
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            keys: KeyConfig::from_lookup(lookup),
            token: TokenConfig::from_lookup(lookup)?,
        })
    }
}

fn default_store_timeout_ms() -> u64 {
    500
}
