pub mod ip_guard;

pub use ip_guard::IpStatusGuard;
