//! Token entities for RS256-signed access tokens.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes in a token identifier (128 bits)
pub const TOKEN_ID_BYTES: usize = 16;

/// Claims structure for the signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated principal)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Token ID, the revocation store key
    pub jti: String,
}

impl Claims {
    /// Creates claims for a freshly minted token
    ///
    /// # Arguments
    ///
    /// * `subject` - The principal the token is bound to
    /// * `issued_at` - Mint time in seconds since the epoch
    /// * `expiry_seconds` - Lifetime added to `issued_at`, must be positive
    pub fn new(subject: impl Into<String>, issued_at: i64, expiry_seconds: i64) -> Self {
        Self {
            sub: subject.into(),
            iat: issued_at,
            exp: issued_at.saturating_add(expiry_seconds),
            jti: generate_token_id(),
        }
    }

    /// The principal this token asserts
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Identifier used as the revocation store key
    pub fn token_id(&self) -> &str {
        &self.jti
    }

    /// Checks expiry at `now`, widened by `leeway_seconds`
    ///
    /// Reaching `exp` exactly counts as expired.
    pub fn is_expired_at(&self, now: i64, leeway_seconds: i64) -> bool {
        now >= self.exp.saturating_add(leeway_seconds.max(0))
    }

    /// Seconds left before `exp`, or zero once expired
    pub fn remaining_seconds(&self, now: i64) -> i64 {
        (self.exp - now).max(0)
    }
}

/// A freshly issued token together with the claims signed into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The encoded token handed to the client
    pub token: String,

    /// The claims signed into `token`
    pub claims: Claims,
}

impl IssuedToken {
    /// Lifetime of the token in seconds
    pub fn expires_in(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}

/// Generates a random 128-bit token identifier, hex encoded
pub fn generate_token_id() -> String {
    let mut bytes = [0u8; TOKEN_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
