//! Token engine error taxonomy
//!
//! Issuance and startup failures (`InvalidSubject`, `SigningFailure`,
//! `KeyLoadFailure`) are separated from verification and revocation failures
//! (`MalformedToken`, `InvalidSignature`, `TokenExpired`, `TokenRevoked`,
//! `StoreUnavailable`) so that callers can map each kind to its own response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the token engine and the key loader
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Subject must be a non-empty string")]
    InvalidSubject,

    #[error("Token signing failed")]
    SigningFailure,

    #[error("Failed to load key material: {message}")]
    KeyLoadFailure { message: String },

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Revocation store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl TokenError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::InvalidSubject => "INVALID_SUBJECT",
            TokenError::SigningFailure => "SIGNING_FAILURE",
            TokenError::KeyLoadFailure { .. } => "KEY_LOAD_FAILURE",
            TokenError::MalformedToken => "MALFORMED_TOKEN",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::TokenRevoked => "TOKEN_REVOKED",
            TokenError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
        }
    }

    /// Only store outages are transient; every other kind is final
    pub fn is_retryable(&self) -> bool {
        matches!(self, TokenError::StoreUnavailable { .. })
    }
}

/// Errors returned by the access list service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessListError {
    #[error("Not an IP address: {0}")]
    InvalidAddress(String),

    #[error("Access list store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl AccessListError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AccessListError::InvalidAddress(_) => "INVALID_IP_ADDRESS",
            AccessListError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AccessListError::StoreUnavailable { .. })
    }
}

impl From<StoreError> for AccessListError {
    fn from(err: StoreError) -> Self {
        AccessListError::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

/// Errors surfaced by store implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store call timed out after {0}ms")]
    Timeout(u64),
}

impl From<StoreError> for TokenError {
    fn from(err: StoreError) -> Self {
        TokenError::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Convert TokenError to ErrorResponse
impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        // Store and key details stay in the logs
        let message = match err {
            TokenError::StoreUnavailable { .. } => "Revocation store unavailable".to_string(),
            TokenError::KeyLoadFailure { .. } => "Key material unavailable".to_string(),
            other => other.to_string(),
        };
        ErrorResponse::new(err.code(), message)
    }
}

impl From<&AccessListError> for ErrorResponse {
    fn from(err: &AccessListError) -> Self {
        let message = match err {
            AccessListError::StoreUnavailable { .. } => "Access list store unavailable".to_string(),
            other => other.to_string(),
        };
        ErrorResponse::new(err.code(), message)
    }
}
