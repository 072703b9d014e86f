//! Configuration for the token service

use std::time::Duration;

use sigil_shared::TokenConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Token lifetime in seconds, at least one
    pub expiry_seconds: i64,
    /// Seconds of skew tolerated past `exp`; only ever widens acceptance
    pub leeway_seconds: i64,
    /// Bound applied to every revocation store call
    pub store_timeout: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&TokenConfig::default())
    }
}

impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            expiry_seconds: config.expiry_seconds.max(1),
            leeway_seconds: config.leeway_seconds.max(0),
            store_timeout: Duration::from_millis(config.store_timeout_ms),
        }
    }
}

impl TokenServiceConfig {
    /// Set the token lifetime
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expiry_seconds = seconds.max(1);
        self
    }

    /// Set the expiry leeway
    pub fn with_leeway_seconds(mut self, seconds: i64) -> Self {
        self.leeway_seconds = seconds.max(0);
        self
    }

    /// Set the store call bound
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}
