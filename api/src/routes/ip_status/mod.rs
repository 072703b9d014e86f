//! Access list route handlers
//!
//! - Set statuses for a batch of addresses
//! - List every recorded status
//! - Look up one address

pub mod list;
pub mod lookup;
pub mod set;

pub use list::list_ip_statuses;
pub use lookup::get_ip_status;
pub use set::set_ip_statuses;
