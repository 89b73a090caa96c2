//! The resource gateway.
//!
//! [`ResourceGateway`] is the single entry point callers use. It owns one
//! static and one remote provider and forwards every operation to whichever
//! is currently selected. The selection can be flipped at any time with
//! [`ResourceGateway::set_source`]; operations already in flight finish on
//! the provider they started on.
//!
//! # Example
//!
//! ```no_run
//! use access_catalog::config::GatewayConfig;
//! use access_catalog::core::DataProvider;
//! use access_catalog::gateway::ResourceGateway;
//! use access_catalog::types::QueryOptions;
//!
//! # async fn example() -> access_catalog::error::CatalogResult<()> {
//! let gateway = ResourceGateway::from_config(GatewayConfig::default());
//! let users = gateway.search("users", "patrick", &["name"]).await?;
//!
//! gateway.set_source(true);
//! assert_eq!(gateway.provider_type().as_str(), "http");
//! let page = gateway.fetch_all("computers", &QueryOptions::new()).await?;
//! # Ok(())
//! # }
//! ```

mod facade;

pub use facade::ResourceGateway;
