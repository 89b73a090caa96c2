//! The remote source provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use crate::core::{DataProvider, ProviderKind};
use crate::error::{CatalogResult, RemoteError};
use crate::query;
use crate::types::{QueryOptions, Record, ResultEnvelope};

use super::client::HttpClient;
use super::config::RemoteSourceConfig;

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// A provider backed by the catalog REST API.
///
/// Listing fetches the whole collection and runs the query pipeline locally,
/// so search, sort and pagination behave exactly as they do for the static
/// source.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    config: RemoteSourceConfig,
    client: HttpClient,
}

impl RemoteSource {
    /// Creates a remote source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration fails validation or
    /// a configured header is malformed.
    pub fn new(config: RemoteSourceConfig) -> CatalogResult<Self> {
        config.validate()?;
        let client = HttpClient::new(&config)?;
        debug!(
            base_url = %client.base_url(),
            timeout_ms = config.timeout_ms,
            "Remote source initialized"
        );
        Ok(Self { config, client })
    }

    /// The configuration in use.
    pub fn config(&self) -> &RemoteSourceConfig {
        &self.config
    }

    /// The normalized base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl DataProvider for RemoteSource {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }

    #[instrument(skip(self, options), fields(provider = "remote"))]
    async fn fetch_all(
        &self,
        resource_type: &str,
        options: &QueryOptions,
    ) -> CatalogResult<ResultEnvelope> {
        let endpoint = self.config.endpoint_for(resource_type);
        debug!(%endpoint, ?options, "Fetching resources");

        match self.client.get_json::<Vec<Record>>(&endpoint).await {
            Ok(records) => {
                let page = query::process(&records, options);
                debug!(
                    original = records.len(),
                    total = page.total,
                    page = page.page,
                    total_pages = page.total_pages,
                    "Returning paginated data"
                );
                Ok(page)
            }
            // A missing collection lists as empty rather than failing.
            Err(RemoteError::NotFound { url }) => {
                warn!(%url, "Collection not found, returning empty page");
                Ok(ResultEnvelope::empty(options.page(), options.page_size()))
            }
            Err(e) => {
                error!(error = %e, url = %e.url(), "Failed to fetch resources");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self), fields(provider = "remote"))]
    async fn fetch_by_id(&self, resource_type: &str, id: &str) -> CatalogResult<Record> {
        let endpoint = self.config.endpoint_for(resource_type);
        let record = self
            .client
            .get_json_at::<Record>(&endpoint, id)
            .await
            .inspect_err(|e| error!(error = %e, url = %e.url(), "Failed to fetch resource"))?;
        debug!("Found resource");
        Ok(record)
    }

    #[instrument(skip(self), fields(provider = "remote"))]
    async fn count(&self, resource_type: &str) -> CatalogResult<u64> {
        let path = format!("{}/count", self.config.endpoint_for(resource_type));
        let response = self
            .client
            .get_json::<CountResponse>(&path)
            .await
            .inspect_err(|e| error!(error = %e, url = %e.url(), "Failed to get count"))?;
        debug!(count = response.count, "Counted resources");
        Ok(response.count)
    }

    #[instrument(skip(self), fields(provider = "remote"))]
    async fn health_check(&self) -> bool {
        match self.client.get_json::<HealthResponse>("/health").await {
            Ok(response) => {
                let healthy = response.status == "ok";
                debug!(healthy, status = %response.status, "Health check complete");
                healthy
            }
            Err(e) => {
                error!(error = %e, url = %e.url(), "Health check failed");
                false
            }
        }
    }
}
