//! `mysql-admin structure` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use crate::output::{self, OutputFormat};
use colored::Colorize;

/// Show the column layout of a table
pub async fn run(
    client: &ApiClient,
    database: &str,
    table: &str,
    format: OutputFormat,
) -> Result<()> {
    let columns = client.get_table_structure(database, table).await?;

    match format {
        OutputFormat::Json => print!("{}", output::to_json(&columns)?),
        OutputFormat::Table => {
            println!("{}", format!("{}.{}", database, table).cyan().bold());
            print!("{}", output::structure_table(&columns));
        }
    }

    Ok(())
}
