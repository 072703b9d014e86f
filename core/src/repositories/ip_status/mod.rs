pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::MemoryIpStatusStore;
pub use r#trait::IpStatusStore;

#[cfg(test)]
mod tests;
