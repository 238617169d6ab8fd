//! API client module
//!
//! HTTP client for the MySQL Admin backend, reached through the reverse
//! proxy's base path.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::*;
