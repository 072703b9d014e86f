//! # Sigil Core
//!
//! Token engine for the Sigil service: claims, the RS256 key pair, the
//! revocation store contract and the issue/verify/revoke service built on
//! them, plus the client address access list. Nothing here knows about HTTP
//! or Redis.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
