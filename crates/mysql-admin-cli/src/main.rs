//! mysql-admin - Main entry point

use clap::Parser;
use mysql_admin_cli::api::{ApiClient, TableDataParams};
use mysql_admin_cli::{commands, Cli, Commands};
use mysql_admin_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; flags and real env vars still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(ref command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("mysql-admin")
        .build();

    // Environment variables take precedence; the CLI works without logging
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);
    let _log_guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli, command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Build the shared client once and dispatch to the command
async fn execute_command(cli: &Cli, command: &Commands) -> mysql_admin_cli::Result<()> {
    let client = ApiClient::new(cli.client_config())?;
    debug!(api = %client.api_base_url(), timeout_ms = client.config().timeout_ms(), "API client ready");

    match command {
        Commands::Users => commands::users::run(&client, cli.format).await,

        Commands::Databases { with_tables } => {
            commands::databases::run(&client, *with_tables, cli.format).await
        }

        Commands::Tables { database } => commands::tables::run(&client, database, cli.format).await,

        Commands::Structure { database, table } => {
            commands::structure::run(&client, database, table, cli.format).await
        }

        Commands::Data {
            database,
            table,
            limit,
            offset,
        } => {
            let params = TableDataParams::new(*limit, *offset);
            commands::data::run(&client, database, table, params, cli.format).await
        }

        Commands::Status => commands::status::run(&client).await,
    }
}
