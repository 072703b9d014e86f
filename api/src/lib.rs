//! # Sigil API
//!
//! HTTP surface of the Sigil token service. Handlers parse requests, call the
//! token engine or the access list and map their errors to status codes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AccessList, AppState, TokenEngine};
