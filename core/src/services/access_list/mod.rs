//! Access list of trusted and blocked client addresses
//!
//! Requests from a blocked address are refused before they reach the token
//! endpoints; trusted addresses skip that check.

mod service;

#[cfg(test)]
mod tests;

pub use service::AccessListService;
