//! API endpoint URL builders
//!
//! `api_base_url` is the server URL already joined with the base path
//! (see [`ClientConfig::api_base_url`](crate::config::ClientConfig::api_base_url)).
//! Database and table names are percent-encoded so that each one stays a
//! single path segment. `.` and `..` are refused: URL parsing resolves them,
//! and their `%2E` forms, as dot-segments, so no encoding keeps them in place.

use crate::error::{CliError, Result};
use urlencoding::encode;

/// Build service banner URL
pub fn root_url(api_base_url: &str) -> String {
    format!("{}/", api_base_url)
}

/// Build user list URL
pub fn users_url(api_base_url: &str) -> String {
    format!("{}/users", api_base_url)
}

/// Build database list URL
pub fn databases_url(api_base_url: &str) -> String {
    format!("{}/databases", api_base_url)
}

/// Build table list URL for one database
pub fn tables_url(api_base_url: &str, database: &str) -> Result<String> {
    Ok(format!("{}/tables", database_url(api_base_url, database)?))
}

/// Build table structure URL
pub fn table_structure_url(api_base_url: &str, database: &str, table: &str) -> Result<String> {
    Ok(format!("{}/structure", table_url(api_base_url, database, table)?))
}

/// Build table data URL with pagination
pub fn table_data_url(
    api_base_url: &str,
    database: &str,
    table: &str,
    limit: i64,
    offset: i64,
) -> Result<String> {
    Ok(format!(
        "{}/data?limit={}&offset={}",
        table_url(api_base_url, database, table)?,
        limit,
        offset
    ))
}

fn database_url(api_base_url: &str, database: &str) -> Result<String> {
    Ok(format!("{}/databases/{}", api_base_url, path_segment(database)?))
}

fn table_url(api_base_url: &str, database: &str, table: &str) -> Result<String> {
    Ok(format!(
        "{}/tables/{}",
        database_url(api_base_url, database)?,
        path_segment(table)?
    ))
}

/// Percent-encode one name for use as a single path segment
fn path_segment(name: &str) -> Result<String> {
    match name {
        "." | ".." => Err(CliError::InvalidName(name.to_string())),
        _ => Ok(encode(name).into_owned()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/api";

    #[test]
    fn test_root_url() {
        assert_eq!(root_url(BASE), "http://localhost:8080/api/");
    }

    #[test]
    fn test_users_url() {
        assert_eq!(users_url(BASE), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_databases_url() {
        assert_eq!(databases_url(BASE), "http://localhost:8080/api/databases");
    }

    #[test]
    fn test_tables_url() {
        assert_eq!(
            tables_url(BASE, "shop").unwrap(),
            "http://localhost:8080/api/databases/shop/tables"
        );
    }

    #[test]
    fn test_table_structure_url() {
        assert_eq!(
            table_structure_url(BASE, "shop", "orders").unwrap(),
            "http://localhost:8080/api/databases/shop/tables/orders/structure"
        );
    }

    #[test]
    fn test_table_data_url() {
        assert_eq!(
            table_data_url(BASE, "shop", "orders", 100, 0).unwrap(),
            "http://localhost:8080/api/databases/shop/tables/orders/data?limit=100&offset=0"
        );
        assert_eq!(
            table_data_url(BASE, "shop", "orders", 50, 20).unwrap(),
            "http://localhost:8080/api/databases/shop/tables/orders/data?limit=50&offset=20"
        );
    }

    #[test]
    fn test_reserved_characters_stay_inside_their_segment() {
        assert_eq!(
            tables_url(BASE, "../users").unwrap(),
            "http://localhost:8080/api/databases/..%2Fusers/tables"
        );
        assert_eq!(
            table_structure_url(BASE, "my db", "orders?x=1#frag").unwrap(),
            "http://localhost:8080/api/databases/my%20db/tables/orders%3Fx%3D1%23frag/structure"
        );
    }

    #[test]
    fn test_unreserved_names_are_unchanged() {
        assert_eq!(
            tables_url(BASE, "shop_v2-archive.2024~old").unwrap(),
            "http://localhost:8080/api/databases/shop_v2-archive.2024~old/tables"
        );
    }

    #[test]
    fn test_dot_segment_names_are_rejected() {
        for name in [".", ".."] {
            assert!(matches!(tables_url(BASE, name), Err(CliError::InvalidName(ref n)) if n == name));
            assert!(table_structure_url(BASE, "shop", name).is_err());
            assert!(table_data_url(BASE, name, "orders", 100, 0).is_err());
        }
    }

    #[test]
    fn test_names_containing_dots_are_allowed() {
        assert_eq!(
            table_structure_url(BASE, "...", "a..b").unwrap(),
            "http://localhost:8080/api/databases/.../tables/a..b/structure"
        );
    }
}
