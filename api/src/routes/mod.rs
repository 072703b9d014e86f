//! HTTP route handlers

pub mod health;
pub mod ip_status;
pub mod tokens;
