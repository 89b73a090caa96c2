//! Core provider abstractions.
//!
//! - [`DataProvider`] - The capability set every data source implements
//! - [`ProviderKind`] - Static (bundled files) or remote (HTTP)
//! - [`DynProvider`] - A shared trait object, as held by the gateway
//!
//! # Implementing a Provider
//!
//! ```ignore
//! use async_trait::async_trait;
//! use access_catalog::core::{DataProvider, ProviderKind};
//! use access_catalog::error::CatalogResult;
//! use access_catalog::types::{QueryOptions, Record, ResultEnvelope};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     fn kind(&self) -> ProviderKind {
//!         ProviderKind::Static
//!     }
//!
//!     async fn fetch_all(
//!         &self,
//!         resource_type: &str,
//!         options: &QueryOptions,
//!     ) -> CatalogResult<ResultEnvelope> {
//!         let records: Vec<Record> = load(resource_type)?;
//!         Ok(access_catalog::query::process(&records, options))
//!     }
//!
//!     // ... fetch_by_id, count, health_check
//! }
//! ```

mod provider;

pub use provider::{DataProvider, DynProvider, ProviderKind};
