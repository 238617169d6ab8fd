//! Rendering of API payloads for the terminal
//!
//! Table output is built with comfy-table; JSON output is the payload as the
//! API returned it, pretty-printed.

use crate::api::types::{ColumnInfo, DatabaseInfo, TableData, TableDataParams, TableInfo, UserInfo};
use crate::error::Result;
use clap::ValueEnum;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use serde::Serialize;
use serde_json::Value;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Pretty-print any payload as JSON
pub fn to_json<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(payload)?))
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

pub fn users_table(users: &[UserInfo]) -> String {
    let mut table = new_table();
    table.set_header(vec!["User", "Host", "Locked", "Password Expired"]);

    for user in users {
        table.add_row(vec![
            user.user.as_str(),
            user.host.as_str(),
            user.account_locked.as_str(),
            user.password_expired.as_str(),
        ]);
    }

    format!("{}\n", table)
}

/// Database list; with `tables`, one extra column listing each database's tables
pub fn databases_table(databases: &[DatabaseInfo], tables: Option<&[Vec<TableInfo>]>) -> String {
    let mut table = new_table();

    match tables {
        Some(tables) => {
            table.set_header(vec!["Database", "Tables"]);
            for (database, db_tables) in databases.iter().zip(tables) {
                let names: Vec<&str> = db_tables.iter().map(|t| t.name.as_str()).collect();
                table.add_row(vec![database.name.clone(), names.join(", ")]);
            }
        }
        None => {
            table.set_header(vec!["Database"]);
            for database in databases {
                table.add_row(vec![database.name.as_str()]);
            }
        }
    }

    format!("{}\n", table)
}

pub fn tables_table(tables: &[TableInfo]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Table", "Database"]);

    for info in tables {
        table.add_row(vec![info.name.as_str(), info.database.as_str()]);
    }

    format!("{}\n", table)
}

pub fn structure_table(columns: &[ColumnInfo]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Column", "Type", "Nullable", "Default", "Key", "Extra"]);

    for column in columns {
        table.add_row(vec![
            column.column_name.as_str(),
            column.data_type.as_str(),
            column.is_nullable.as_str(),
            column.column_default.as_deref().unwrap_or("NULL"),
            column.column_key.as_str(),
            column.extra.as_str(),
        ]);
    }

    format!("{}\n", table)
}

/// Rows in column order, followed by a one-line position summary
pub fn table_data_table(data: &TableData, params: TableDataParams) -> String {
    let mut table = new_table();
    let headers: Vec<&str> = data.columns.iter().map(|c| c.column_name.as_str()).collect();
    table.set_header(headers.clone());

    for row in &data.rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|name| row.get(*name).map(value_to_string).unwrap_or_default())
            .collect();
        table.add_row(cells);
    }

    format!("{}\n{}\n", table, page_summary(data, params))
}

/// "Rows 21-70 of 4213", or a note that the page is empty
///
/// A negative offset is numbered from row 1 and echoed back as requested.
pub fn page_summary(data: &TableData, params: TableDataParams) -> String {
    if data.rows.is_empty() {
        return format!(
            "No rows at offset {} ({} total)",
            params.offset, data.total_rows
        );
    }

    let count = i64::try_from(data.rows.len()).unwrap_or(i64::MAX);
    let start = params.offset.max(0);
    let first = start.saturating_add(1);
    let last = start.saturating_add(count);
    let summary = format!("Rows {}-{} of {}", first, last, data.total_rows);

    if params.offset < 0 {
        format!("{} (offset {} requested)", summary, params.offset)
    } else {
        summary
    }
}

/// Convert JSON value to string for display
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            format!("[{}]", arr.iter().map(value_to_string).collect::<Vec<_>>().join(", "))
        }
        Value::Object(_) => value.to_string(),
    }
}
