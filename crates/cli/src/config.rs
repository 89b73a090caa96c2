//! Command-line configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CATALOG_USE_REMOTE` | false | Start on the remote API instead of bundled data |
//! | `CATALOG_API_BASE_URL` | mock API | Remote API base URL |
//! | `CATALOG_API_TIMEOUT_MS` | 10000 | Remote request timeout (milliseconds) |
//! | `CATALOG_MOCK_DELAY_MS` | 300 | Simulated latency of the static source (milliseconds) |
//! | `CATALOG_LOG_LEVEL` | info | Log level |
//! | `CATALOG_DATA_DIR` | - | Directory of extra `<resource-type>.json` datasets |

use std::path::PathBuf;

use access_catalog::backends::remote::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use access_catalog::backends::static_source::DEFAULT_DELAY_MS;
use access_catalog::types::{QueryOptions, SortDirection};
use access_catalog::{GatewayConfig, RemoteSourceConfig, StaticSourceConfig};
use clap::{Args, Parser, Subcommand};

/// Access catalog command-line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog")]
#[command(about = "Browse the access catalog from bundled data or the remote API")]
pub struct CliConfig {
    /// Use the remote API instead of bundled data.
    #[arg(long, env = "CATALOG_USE_REMOTE", default_value = "false")]
    pub use_remote: bool,

    /// Remote API base URL.
    #[arg(long, env = "CATALOG_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Remote request timeout in milliseconds.
    #[arg(long, env = "CATALOG_API_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub api_timeout_ms: u64,

    /// Simulated latency of the bundled data source in milliseconds.
    #[arg(long, env = "CATALOG_MOCK_DELAY_MS", default_value_t = DEFAULT_DELAY_MS)]
    pub mock_delay_ms: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory of extra datasets for the bundled source.
    #[arg(long, env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the known resource types.
    Types,

    /// List one page of a resource type.
    List(ListArgs),

    /// Show a single record.
    Get {
        /// Resource type key.
        resource_type: String,
        /// Record identifier.
        id: String,
    },

    /// Count the records of a resource type.
    Count {
        /// Resource type key.
        resource_type: String,
    },

    /// Check whether the selected source is usable.
    Health,
}

/// Arguments of the `list` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Resource type key.
    pub resource_type: String,

    /// Case-insensitive search term.
    #[arg(long)]
    pub search: Option<String>,

    /// Field to match the search term against (repeatable; default all text fields).
    #[arg(long = "field")]
    pub fields: Vec<String>,

    /// Field to sort by.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort in descending order.
    #[arg(long)]
    pub desc: bool,

    /// 1-based page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Records per page.
    #[arg(long, default_value = "10")]
    pub page_size: u32,
}

impl ListArgs {
    /// Builds the query options for this listing.
    pub fn query_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new()
            .with_searchable_fields(self.fields.iter().cloned())
            .with_page(self.page)
            .with_page_size(self.page_size);
        if let Some(search) = &self.search {
            options = options.with_search(search.clone());
        }
        if let Some(field) = &self.sort {
            let direction = if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            options = options.with_sort(field.clone(), direction);
        }
        options
    }
}

impl CliConfig {
    /// Validates the configuration, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.use_remote {
            if let Err(e) = self.remote_config().validate() {
                errors.push(e.to_string());
            }
        } else if self.api_timeout_ms == 0 {
            errors.push("API timeout cannot be 0".to_string());
        }

        if let Command::List(args) = &self.command {
            if args.page == 0 {
                errors.push("Page cannot be 0".to_string());
            }
            if args.page_size == 0 {
                errors.push("Page size cannot be 0".to_string());
            }
        }

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                errors.push(format!("Data directory not found: {}", dir.display()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The remote source settings.
    pub fn remote_config(&self) -> RemoteSourceConfig {
        RemoteSourceConfig::new(self.api_base_url.clone()).with_timeout_ms(self.api_timeout_ms)
    }

    /// The gateway settings.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            use_remote: self.use_remote,
            static_source: StaticSourceConfig {
                delay_ms: self.mock_delay_ms,
                data_dir: self.data_dir.clone(),
            },
            remote: self.remote_config(),
        }
    }
}
