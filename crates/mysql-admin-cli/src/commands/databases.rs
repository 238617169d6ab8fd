//! `mysql-admin databases` command implementation

use crate::api::{ApiClient, TableInfo};
use crate::error::Result;
use crate::output::{self, OutputFormat};
use colored::Colorize;
use futures::future::try_join_all;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct DatabaseWithTables<'a> {
    name: &'a str,
    tables: &'a [TableInfo],
}

/// List databases, optionally with the tables of each
///
/// With `with_tables`, one table-list request per database is issued and all
/// of them run concurrently. The first failure aborts the command.
pub async fn run(client: &ApiClient, with_tables: bool, format: OutputFormat) -> Result<()> {
    let databases = client.list_databases().await?;

    let tables = if with_tables {
        debug!(count = databases.len(), "Fetching table lists");
        Some(try_join_all(databases.iter().map(|db| client.list_tables(&db.name))).await?)
    } else {
        None
    };

    match format {
        OutputFormat::Json => match tables {
            Some(ref tables) => {
                let combined: Vec<DatabaseWithTables<'_>> = databases
                    .iter()
                    .zip(tables)
                    .map(|(db, tables)| DatabaseWithTables {
                        name: &db.name,
                        tables,
                    })
                    .collect();
                print!("{}", output::to_json(&combined)?);
            }
            None => print!("{}", output::to_json(&databases)?),
        },
        OutputFormat::Table => {
            if databases.is_empty() {
                println!("No databases found.");
                return Ok(());
            }
            println!(
                "{}",
                format!("Databases ({})", databases.len()).cyan().bold()
            );
            print!("{}", output::databases_table(&databases, tables.as_deref()));
        }
    }

    Ok(())
}
