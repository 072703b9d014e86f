//! Token engine
//!
//! This module handles:
//! - RS256 key loading and pair validation
//! - Compact token encoding and structural parsing
//! - Issue, verify and revoke against a revocation store
//! - Background purge of lapsed revocation entries

mod cleanup;
mod codec;
mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{RevocationSweeper, SweepResult, SweeperConfig};
pub use codec::{encode_token, ParsedToken, ALGORITHM, MAX_TOKEN_LENGTH};
pub use config::TokenServiceConfig;
pub use key_manager::Rs256KeyManager;
pub use service::TokenService;
