//! Error types for the MySQL Admin CLI
//!
//! Transport failures from the API client are carried through untouched in
//! [`CliError::Http`], so callers can still ask the underlying
//! [`reqwest::Error`] whether it was a timeout or which status came back.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// HTTP request failed: network error, timeout, or non-2xx status
    #[error("Request to the MySQL Admin API failed: {0}. Check that the API is running and reachable at the configured server URL.")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your command-line flags, environment variables, or .env file.")]
    Config(String),

    /// Database or table name that cannot be sent as a URL path segment
    #[error("Invalid name '{0}': '.' and '..' cannot be used as a database or table name.")]
    InvalidName(String),

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The transport error behind this failure, if any
    pub fn as_http(&self) -> Option<&reqwest::Error> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }

    /// True when the request gave up after the configured timeout
    pub fn is_timeout(&self) -> bool {
        self.as_http().is_some_and(reqwest::Error::is_timeout)
    }

    /// HTTP status of a non-2xx response, if that is what failed
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.as_http().and_then(reqwest::Error::status)
    }
}
