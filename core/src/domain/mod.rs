//! Domain layer containing token and access list entities and the engine's
//! time source.

pub mod clock;
pub mod entities;

// Re-export commonly used domain types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::{
    generate_token_id, Claims, IpStatus, IpStatusEntry, IssuedToken, UnknownIpStatus,
    TOKEN_ID_BYTES,
};
