//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function that takes the
//! shared [`ApiClient`](crate::api::ApiClient) built at startup.

pub mod data;
pub mod databases;
pub mod status;
pub mod structure;
pub mod tables;
pub mod users;
