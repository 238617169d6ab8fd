//! `mysql-admin status` command implementation
//!
//! Shows where the client points and whether the API answers.

use crate::api::ApiClient;
use crate::error::Result;
use colored::Colorize;

/// Show connection settings and API reachability
pub async fn run(client: &ApiClient) -> Result<()> {
    let config = client.config();

    println!("{}", "MySQL Admin API".cyan().bold());
    println!("  Server URL: {}", config.server_url());
    println!("  Base path:  {}", config.base_path());
    println!("  API URL:    {}", client.api_base_url());
    println!("  Timeout:    {} ms", config.timeout_ms());

    if client.health_check().await? {
        let banner = match client.service_info().await {
            Ok(info) => info.message,
            Err(_) => String::from("(no banner)"),
        };
        println!("  Status:     {} ({})", "reachable".green(), banner);
    } else {
        println!("  Status:     {}", "unreachable".red());
    }

    Ok(())
}
