//! API request and response types
//!
//! Field for field the same as the backend's response models. Row values are
//! left as raw JSON since their shape depends on the table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A MySQL account as listed from `mysql.user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: String,
    pub host: String,
    /// "Y" or "N"
    pub account_locked: String,
    /// "Y" or "N"
    pub password_expired: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub database: String,
}

/// One column from `INFORMATION_SCHEMA.COLUMNS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    /// "YES" or "NO"
    pub is_nullable: String,
    pub column_default: Option<String>,
    /// PRI, UNI, MUL or empty
    pub column_key: String,
    pub extra: String,
}

/// A page of rows plus the table's column layout and total row count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Map<String, Value>>,
    pub total_rows: i64,
}

/// Banner returned by the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Default number of rows per page.
pub const DEFAULT_LIMIT: i64 = 100;

/// Default row offset.
pub const DEFAULT_OFFSET: i64 = 0;

/// Pagination for [`ApiClient::get_table_data`](crate::api::ApiClient::get_table_data)
///
/// Values are sent to the server unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDataParams {
    pub limit: i64,
    pub offset: i64,
}

impl TableDataParams {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

impl Default for TableDataParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}
