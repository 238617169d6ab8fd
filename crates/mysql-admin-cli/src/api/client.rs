//! HTTP API client for the MySQL Admin backend
//!
//! One [`ApiClient`] is built at startup and shared by every command. Each
//! accessor sends exactly one GET request and hands back whatever the
//! transport produced: the decoded body on success, or the unmodified
//! [`reqwest::Error`] (wrapped in [`CliError::Http`](crate::error::CliError::Http))
//! on timeout, network failure or non-2xx status. Nothing is retried.
//! A database or table name of `.` or `..` fails with
//! [`CliError::InvalidName`](crate::error::CliError::InvalidName) before any
//! request is sent.

use crate::api::{endpoints, types::*};
use crate::config::ClientConfig;
use crate::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// API client for the MySQL Admin backend
///
/// Cloning is cheap; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    api_base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let api_base_url = config.api_base_url();

        Ok(Self {
            client,
            config,
            api_base_url,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<UserInfo>> {
        self.get_json(endpoints::users_url(&self.api_base_url)).await
    }

    /// `GET /databases`
    pub async fn list_databases(&self) -> Result<Vec<DatabaseInfo>> {
        self.get_json(endpoints::databases_url(&self.api_base_url))
            .await
    }

    /// `GET /databases/{database}/tables`
    pub async fn list_tables(&self, database: &str) -> Result<Vec<TableInfo>> {
        self.get_json(endpoints::tables_url(&self.api_base_url, database)?)
            .await
    }

    /// `GET /databases/{database}/tables/{table}/structure`
    pub async fn get_table_structure(&self, database: &str, table: &str) -> Result<Vec<ColumnInfo>> {
        self.get_json(endpoints::table_structure_url(
            &self.api_base_url,
            database,
            table,
        )?)
        .await
    }

    /// `GET /databases/{database}/tables/{table}/data?limit=&offset=`
    ///
    /// Pass `TableDataParams::default()` for the first 100 rows.
    pub async fn get_table_data(
        &self,
        database: &str,
        table: &str,
        params: TableDataParams,
    ) -> Result<TableData> {
        self.get_json(endpoints::table_data_url(
            &self.api_base_url,
            database,
            table,
            params.limit,
            params.offset,
        )?)
        .await
    }

    /// Fetch the banner served at the API root
    pub async fn service_info(&self) -> Result<ServiceInfo> {
        self.get_json(endpoints::root_url(&self.api_base_url)).await
    }

    /// Check whether the API answers at all
    ///
    /// Unlike the accessors above, an unreachable server is reported as
    /// `Ok(false)` rather than an error.
    pub async fn health_check(&self) -> Result<bool> {
        let url = endpoints::root_url(&self.api_base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(err) => {
                debug!(url = %url, error = %err, "Health check request failed");
                Ok(false)
            }
        }
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Server URL joined with the base path
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8080")).unwrap();
        assert_eq!(client.api_base_url(), "http://localhost:8080/api");
        assert_eq!(client.config().timeout_ms(), 10_000);
    }

    #[test]
    fn test_clones_share_configuration() {
        let client = ApiClient::new(ClientConfig::default().with_timeout_ms(2_500)).unwrap();
        let clone = client.clone();
        assert_eq!(clone.config(), client.config());
        assert_eq!(clone.api_base_url(), client.api_base_url());
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout_ms(500);
        let client = ApiClient::new(config).unwrap();
        assert!(!client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_accessor_unreachable_is_an_error() {
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout_ms(500);
        let client = ApiClient::new(config).unwrap();
        let err = client.list_users().await.unwrap_err();
        assert!(err.as_http().is_some());
    }
}
