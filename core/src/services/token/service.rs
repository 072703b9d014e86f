//! Main token service implementation

use std::future::Future;

use tracing::{debug, error, info, warn};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{StoreError, TokenError};
use crate::repositories::RevocationStore;

use super::codec::{encode_token, ParsedToken};
use super::config::TokenServiceConfig;
use super::key_manager::Rs256KeyManager;

/// Longest token id accepted as a revocation key
const MAX_TOKEN_ID_LENGTH: usize = 128;

/// Service that issues, verifies and revokes RS256-signed tokens
///
/// Holds only immutable state: the key pair, the configuration, a clock and
/// a handle to the revocation store. Share it behind an `Arc`; no method
/// takes `&mut self`.
pub struct TokenService<S: RevocationStore, C: Clock = SystemClock> {
    store: S,
    keys: Rs256KeyManager,
    config: TokenServiceConfig,
    clock: C,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a token service on the wall clock
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store
    /// * `keys` - Loaded RS256 key pair
    /// * `config` - Token service configuration
    pub fn new(store: S, keys: Rs256KeyManager, config: TokenServiceConfig) -> Self {
        Self::with_clock(store, keys, config, SystemClock)
    }
}

impl<S: RevocationStore, C: Clock> TokenService<S, C> {
    /// Creates a token service with an explicit time source
    pub fn with_clock(
        store: S,
        keys: Rs256KeyManager,
        config: TokenServiceConfig,
        clock: C,
    ) -> Self {
        Self {
            store,
            keys,
            config,
            clock,
        }
    }

    /// Issues a signed token for `subject`
    ///
    /// Does not touch the revocation store.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The encoded token and the claims signed into it
    /// * `Err(TokenError::InvalidSubject)` - Subject is empty or blank
    /// * `Err(TokenError::SigningFailure)` - The private key could not sign
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::InvalidSubject);
        }

        let claims = Claims::new(subject, self.clock.now(), self.config.expiry_seconds);
        let token = encode_token(&claims, self.keys.encoding_key()).map_err(|e| {
            error!("Failed to sign token {}: {}", claims.jti, e);
            e
        })?;

        info!("Issued token {} expiring at {}", claims.jti, claims.exp);

        Ok(IssuedToken { token, claims })
    }

    /// Verifies a presented token and returns its claims
    ///
    /// Steps run in order and the first failure is final:
    /// 1. Parse - `MalformedToken`
    /// 2. Signature check - `InvalidSignature`
    /// 3. Expiry check - `TokenExpired`
    /// 4. Revocation check - `TokenRevoked`, or `StoreUnavailable` when the
    ///    store cannot answer within the configured bound
    pub async fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.authenticate(token)?;

        if claims.is_expired_at(self.clock.now(), self.config.leeway_seconds) {
            debug!("Rejected token {}: expired at {}", claims.jti, claims.exp);
            return Err(TokenError::TokenExpired);
        }

        if self.is_revoked(&claims.jti).await? {
            warn!("Rejected token {}: revoked", claims.jti);
            return Err(TokenError::TokenRevoked);
        }

        Ok(claims)
    }

    /// Revokes the token identified by `token_id`
    ///
    /// The entry lives until `expires_at`; a token already past expiry needs
    /// no entry and returns success without a store write. Revoking twice
    /// is harmless. The entry never outlives the longest token this service
    /// issues, whatever `expires_at` claims.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The revocation is recorded (or unnecessary)
    /// * `Err(TokenError::MalformedToken)` - `token_id` is empty or oversized
    /// * `Err(TokenError::StoreUnavailable)` - The write could not be made
    pub async fn revoke(&self, token_id: &str, expires_at: i64) -> Result<(), TokenError> {
        if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LENGTH {
            return Err(TokenError::MalformedToken);
        }

        let now = self.clock.now();
        let ttl = expires_at.saturating_sub(now).min(self.max_token_lifetime());
        if ttl <= 0 {
            debug!("Skipping revocation of {}: already expired", token_id);
            return Ok(());
        }

        let marker = now.to_string();
        self.call_store("set", self.store.set_with_ttl(token_id, &marker, ttl as u64))
            .await?;

        info!("Revoked token {} for {}s", token_id, ttl);
        Ok(())
    }

    /// Revokes a presented token
    ///
    /// The token must parse and carry a valid signature; expiry and prior
    /// revocation are not checked. Returns the claims of the revoked token.
    pub async fn revoke_token(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.authenticate(token)?;
        self.revoke(&claims.jti, claims.exp).await?;
        Ok(claims)
    }

    /// Looks up a token id in the revocation store
    pub async fn is_revoked(&self, token_id: &str) -> Result<bool, TokenError> {
        let entry = self.call_store("get", self.store.get(token_id)).await?;
        Ok(entry.is_some())
    }

    /// Whether the revocation store answers within the configured bound
    pub async fn store_healthy(&self) -> bool {
        self.call_store("ping", self.store.ping()).await.is_ok()
    }

    /// Returns the revocation store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Longest time a token from this service stays acceptable
    fn max_token_lifetime(&self) -> i64 {
        self.config
            .expiry_seconds
            .saturating_add(self.config.leeway_seconds)
    }

    /// Parse and signature check
    fn authenticate(&self, token: &str) -> Result<Claims, TokenError> {
        let parsed = ParsedToken::parse(token).map_err(|e| {
            debug!("Rejected token: malformed");
            e
        })?;

        parsed.verify_signature(self.keys.decoding_key()).map_err(|e| {
            warn!("Rejected token: signature mismatch");
            e
        })
    }

    /// Runs a store call under the configured timeout
    async fn call_store<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, TokenError> {
        let timeout = self.config.store_timeout;
        let result = match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(timeout.as_millis() as u64)),
        };

        result.map_err(|e| {
            error!("Revocation store {} failed: {}", operation, e);
            TokenError::from(e)
        })
    }
}
