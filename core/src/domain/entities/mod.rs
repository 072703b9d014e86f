//! Domain entities representing core token objects.

pub mod ip_status;
pub mod token;

// Re-export commonly used types
pub use ip_status::{IpStatus, IpStatusEntry, UnknownIpStatus};
pub use token::{generate_token_id, Claims, IssuedToken, TOKEN_ID_BYTES};
