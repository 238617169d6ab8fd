//! `mysql-admin data` command implementation
//!
//! Shows one page of rows. Paging is left to the caller through
//! `--limit`/`--offset`; the values go to the server unchecked.

use crate::api::{ApiClient, TableDataParams};
use crate::error::Result;
use crate::output::{self, OutputFormat};
use colored::Colorize;
use tracing::debug;

/// Show one page of a table's rows
pub async fn run(
    client: &ApiClient,
    database: &str,
    table: &str,
    params: TableDataParams,
    format: OutputFormat,
) -> Result<()> {
    debug!(database, table, limit = params.limit, offset = params.offset, "Fetching table data");

    let data = client.get_table_data(database, table, params).await?;

    match format {
        OutputFormat::Json => print!("{}", output::to_json(&data)?),
        OutputFormat::Table => {
            println!("{}", format!("{}.{}", database, table).cyan().bold());
            print!("{}", output::table_data_table(&data, params));
        }
    }

    Ok(())
}
