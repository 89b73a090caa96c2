//! Access Catalog Data Access Layer
//!
//! This crate provides the data access layer for the access catalog: a
//! browsable inventory of roles, licenses, mailboxes, computers, users and
//! shared folders. Callers list, search, sort and page through these
//! collections without caring whether the data comes from bundled datasets
//! or a remote REST API.
//!
//! # Features
//!
//! - **One contract, two sources**: [`StaticSource`] serves bundled datasets
//!   with simulated latency, [`RemoteSource`] talks to the REST API
//! - **Runtime switching**: [`ResourceGateway`] forwards to whichever source is
//!   selected and can be flipped at any time
//! - **Client-side querying**: search, sort and pagination run locally for
//!   both sources, so results are identical in shape and ordering
//! - **Date-aware sorting**: ISO-8601 and localized `DD/MM/YYYY, HH:MM a.m.`
//!   timestamps sort chronologically
//!
//! # Architecture
//!
//! - [`types`] - Records, query options, result envelopes, resource types
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`DataProvider`] trait
//! - [`query`] - The filter, sort and paginate pipeline
//! - [`backends`] - Static and remote providers
//! - [`gateway`] - The switching facade
//! - [`config`] - Gateway configuration
//!
//! # Quick Start
//!
//! ```no_run
//! use access_catalog::{DataProvider, GatewayConfig, ResourceGateway};
//! use access_catalog::types::{QueryOptions, SortDirection};
//!
//! # async fn example() -> access_catalog::CatalogResult<()> {
//! let gateway = ResourceGateway::from_config(GatewayConfig::default());
//!
//! let options = QueryOptions::new()
//!     .with_search("macbook")
//!     .with_sort("endDate", SortDirection::Descending)
//!     .with_page_size(5);
//! let page = gateway.fetch_all("computers", &options).await?;
//!
//! for record in &page.records {
//!     println!("{:?}", record.get("name"));
//! }
//! println!("page {} of {}", page.page, page.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! # Querying without a provider
//!
//! The pipeline is plain functions over records and can be used directly:
//!
//! ```
//! use access_catalog::query;
//! use access_catalog::types::{QueryOptions, Record};
//!
//! let records = vec![
//!     Record::new().with("id", 1).with("name", "Patrick Parker"),
//!     Record::new().with("id", 2).with("name", "Alice Wong"),
//! ];
//! let page = query::process(&records, &QueryOptions::new().with_search("PARKER"));
//! assert_eq!(page.total, 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod config;
pub mod core;
pub mod error;
pub mod gateway;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use config::GatewayConfig;
pub use error::{CatalogError, CatalogResult};
pub use gateway::ResourceGateway;
pub use types::{QueryOptions, Record, ResultEnvelope, SortDirection};

// Re-export core traits
pub use core::{DataProvider, DynProvider, ProviderKind};

// Re-export providers
pub use backends::{RemoteSource, RemoteSourceConfig, StaticSource, StaticSourceConfig};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
