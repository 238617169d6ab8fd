//! MySQL Admin CLI Library
//!
//! Client for the MySQL Admin REST API plus the `mysql-admin` command-line
//! front end built on it.
//!
//! # Overview
//!
//! - **API client**: [`api::ApiClient`] wraps one configured HTTP client and
//!   exposes the read-only endpoints (users, databases, tables, structure,
//!   rows)
//! - **Configuration**: [`config::ClientConfig`] holds server URL, base path
//!   (`/api`) and request timeout (10 s)
//! - **Commands**: one module per subcommand under [`commands`]
//!
//! # Example
//!
//! ```no_run
//! use mysql_admin_cli::api::{ApiClient, TableDataParams};
//! use mysql_admin_cli::config::ClientConfig;
//!
//! # async fn demo() -> mysql_admin_cli::Result<()> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8080"))?;
//! let tables = client.list_tables("shop").await?;
//! let page = client
//!     .get_table_data("shop", "orders", TableDataParams::default())
//!     .await?;
//! println!("{} tables, {} rows in orders", tables.len(), page.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use output::OutputFormat;

/// mysql-admin - browse a MySQL server through the MySQL Admin API
#[derive(Parser, Debug)]
#[command(name = "mysql-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Origin of the reverse proxy in front of the API
    #[arg(long, env = config::SERVER_URL_ENV, default_value = config::DEFAULT_SERVER_URL, global = true)]
    pub server_url: String,

    /// Path prefix the proxy routes to the API
    #[arg(long, env = config::BASE_PATH_ENV, default_value = config::DEFAULT_BASE_PATH, global = true)]
    pub base_path: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = config::TIMEOUT_MS_ENV, default_value_t = config::DEFAULT_TIMEOUT_MS, global = true)]
    pub timeout_ms: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Print the full CLI reference as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Client configuration assembled from flags and environment
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server_url.clone())
            .with_base_path(self.base_path.clone())
            .with_timeout_ms(self.timeout_ms)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List MySQL user accounts
    Users,

    /// List databases
    Databases {
        /// Also list the tables of every database
        #[arg(long)]
        with_tables: bool,
    },

    /// List the tables in a database
    Tables {
        /// Database name
        database: String,
    },

    /// Show the column structure of a table
    Structure {
        /// Database name
        database: String,

        /// Table name
        table: String,
    },

    /// Show a page of rows from a table
    Data {
        /// Database name
        database: String,

        /// Table name
        table: String,

        /// Maximum number of rows to fetch
        #[arg(short, long, default_value_t = api::types::DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,

        /// Number of rows to skip
        #[arg(short, long, default_value_t = api::types::DEFAULT_OFFSET, allow_negative_numbers = true)]
        offset: i64,
    },

    /// Show API connection settings and reachability
    Status,
}
