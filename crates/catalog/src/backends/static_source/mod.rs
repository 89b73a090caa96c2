//! Static data source.
//!
//! Serves the bundled datasets from memory, with an artificial delay that
//! emulates network latency so callers see realistic asynchronous behaviour.
//!
//! # Example
//!
//! ```no_run
//! use access_catalog::backends::static_source::{StaticSource, StaticSourceConfig};
//! use access_catalog::core::DataProvider;
//! use access_catalog::types::QueryOptions;
//!
//! # async fn example() -> access_catalog::error::CatalogResult<()> {
//! let source = StaticSource::new(StaticSourceConfig::default())?;
//! let page = source
//!     .fetch_all("computers", &QueryOptions::new().with_page_size(10))
//!     .await?;
//! assert_eq!(page.total, 25);
//! assert_eq!(page.total_pages, 3);
//! # Ok(())
//! # }
//! ```

mod config;
mod datasets;
mod provider;

pub use config::{DEFAULT_DELAY_MS, StaticSourceConfig};
pub use datasets::EMPTY_COLLECTIONS;
pub use provider::StaticSource;
