//! `mysql-admin users` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use crate::output::{self, OutputFormat};
use colored::Colorize;

/// List MySQL accounts
pub async fn run(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let users = client.list_users().await?;

    match format {
        OutputFormat::Json => print!("{}", output::to_json(&users)?),
        OutputFormat::Table => {
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            println!("{}", format!("Users ({})", users.len()).cyan().bold());
            print!("{}", output::users_table(&users));
        }
    }

    Ok(())
}
