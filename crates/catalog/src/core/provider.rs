//! The data provider contract.
//!
//! This module defines the [`DataProvider`] trait implemented by every data
//! source. A provider resolves a resource type key to a collection of
//! [`Record`]s and answers listing, lookup, count and health requests for it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::types::{QueryOptions, Record, ResultEnvelope};

/// Which kind of source a provider reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Bundled, in-process datasets.
    #[serde(rename = "file")]
    Static,
    /// The remote REST API.
    #[serde(rename = "http")]
    Remote,
}

impl ProviderKind {
    /// The short name reported to callers ("file" or "http").
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Static => "file",
            ProviderKind::Remote => "http",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of catalog records.
///
/// Every operation is asynchronous and may suspend: the static source waits
/// out its simulated latency, the remote source waits on the network.
/// Operations are independent of each other; overlapping calls may complete
/// in any order.
///
/// # Example
///
/// ```ignore
/// use access_catalog::core::DataProvider;
/// use access_catalog::types::QueryOptions;
///
/// async fn first_page<P: DataProvider>(provider: &P) -> CatalogResult<()> {
///     let page = provider
///         .fetch_all("computers", &QueryOptions::new().with_search("mac"))
///         .await?;
///     println!("{} of {} computers", page.records.len(), page.total);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// The kind of source this provider reads from.
    fn kind(&self) -> ProviderKind;

    /// Lists one page of a collection after search and sort.
    ///
    /// # Errors
    ///
    /// * `ResourceError::UnknownResourceType` - static source, unregistered key
    /// * `RemoteError::*` - remote source transport or status failures
    async fn fetch_all(
        &self,
        resource_type: &str,
        options: &QueryOptions,
    ) -> CatalogResult<ResultEnvelope>;

    /// Returns the record whose identifier loosely equals `id`.
    async fn fetch_by_id(&self, resource_type: &str, id: &str) -> CatalogResult<Record>;

    /// Returns the size of a collection.
    async fn count(&self, resource_type: &str) -> CatalogResult<u64>;

    /// Reports whether the source is usable. Never fails; problems are
    /// reported as `false`.
    async fn health_check(&self) -> bool;
}

/// A shared, dynamically typed provider.
pub type DynProvider = Arc<dyn DataProvider>;
