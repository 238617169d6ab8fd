//! Client configuration
//!
//! A [`ClientConfig`] is assembled once at startup and handed to
//! [`ApiClient::new`](crate::api::ApiClient::new). The client keeps its own
//! copy, so the settings cannot change for the lifetime of that client.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Origin the reverse proxy listens on when not otherwise configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Path prefix the reverse proxy routes to the API backend.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const SERVER_URL_ENV: &str = "MYSQL_ADMIN_SERVER_URL";
pub const BASE_PATH_ENV: &str = "MYSQL_ADMIN_BASE_PATH";
pub const TIMEOUT_MS_ENV: &str = "MYSQL_ADMIN_TIMEOUT_MS";

/// Where the API lives and how long a single request may take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    server_url: String,
    base_path: String,
    timeout_ms: u64,
}

impl ClientConfig {
    /// Config for `server_url` with the default base path and timeout
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Load config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let server_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let mut config = Self::new(server_url);

        if let Ok(base_path) = std::env::var(BASE_PATH_ENV) {
            config = config.with_base_path(base_path);
        }

        if let Ok(raw) = std::env::var(TIMEOUT_MS_ENV) {
            config = config.with_timeout_ms(parse_timeout_ms(&raw)?);
        }

        Ok(config)
    }

    /// Replace the base path. A missing leading slash is added and a trailing
    /// one dropped, so "api", "/api" and "/api/" all mean the same prefix.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = normalize_base_path(&base_path.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Absolute URL every endpoint path is appended to
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), self.base_path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Parse a timeout given in whole milliseconds
pub fn parse_timeout_ms(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        CliError::config(format!(
            "{} must be a whole number of milliseconds, got '{}'",
            TIMEOUT_MS_ENV, raw
        ))
    })
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(SERVER_URL_ENV);
        std::env::remove_var(BASE_PATH_ENV);
        std::env::remove_var(TIMEOUT_MS_ENV);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url(), "http://localhost:8080");
        assert_eq!(config.base_path(), "/api");
        assert_eq!(config.timeout_ms(), 10_000);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.api_base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_api_base_url_joins_without_double_slash() {
        let config = ClientConfig::new("http://db-admin.internal/");
        assert_eq!(config.api_base_url(), "http://db-admin.internal/api");
    }

    #[test]
    fn test_base_path_normalization() {
        let base = ClientConfig::new("http://localhost:8080");
        assert_eq!(base.clone().with_base_path("api").base_path(), "/api");
        assert_eq!(base.clone().with_base_path("/api/").base_path(), "/api");
        assert_eq!(base.clone().with_base_path("/admin/api").base_path(), "/admin/api");

        let root = base.with_base_path("/");
        assert_eq!(root.base_path(), "");
        assert_eq!(root.api_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_timeout_ms() {
        assert_eq!(parse_timeout_ms("2500").unwrap(), 2500);
        assert_eq!(parse_timeout_ms(" 10000 ").unwrap(), 10_000);
        assert!(matches!(parse_timeout_ms("10s"), Err(CliError::Config(_))));
        assert!(parse_timeout_ms("-1").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(SERVER_URL_ENV, "https://admin.example.com");
        std::env::set_var(BASE_PATH_ENV, "backend");
        std::env::set_var(TIMEOUT_MS_ENV, "3000");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url(), "https://admin.example.com/backend");
        assert_eq!(config.timeout_ms(), 3000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        std::env::set_var(TIMEOUT_MS_ENV, "soon");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }
}
