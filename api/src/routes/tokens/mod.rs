//! Token route handlers
//!
//! - Issue a token for a subject
//! - Verify a presented token
//! - Revoke by token id or by presented token

pub mod issue;
pub mod revoke;
pub mod verify;

pub use issue::issue_token;
pub use revoke::revoke_token;
pub use verify::verify_token;
