//! Repository interfaces the services depend on.

pub mod ip_status;
pub mod revocation;

pub use ip_status::{IpStatusStore, MemoryIpStatusStore};
pub use revocation::{MemoryRevocationStore, RevocationStore};
