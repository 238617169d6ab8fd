//! `mysql-admin tables` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use crate::output::{self, OutputFormat};
use colored::Colorize;

/// List the tables of one database
pub async fn run(client: &ApiClient, database: &str, format: OutputFormat) -> Result<()> {
    let tables = client.list_tables(database).await?;

    match format {
        OutputFormat::Json => print!("{}", output::to_json(&tables)?),
        OutputFormat::Table => {
            if tables.is_empty() {
                println!("Database '{}' has no tables.", database);
                return Ok(());
            }
            println!(
                "{}",
                format!("Tables in {} ({})", database, tables.len()).cyan().bold()
            );
            print!("{}", output::tables_table(&tables));
        }
    }

    Ok(())
}
