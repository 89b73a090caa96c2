//! ResourceGateway implementation.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::backends::{RemoteSource, StaticSource};
use crate::config::GatewayConfig;
use crate::core::{DataProvider, DynProvider, ProviderKind};
use crate::error::{CatalogError, CatalogResult};
use crate::types::{QueryOptions, Record, ResultEnvelope};

/// Facade that delegates to the selected provider.
pub struct ResourceGateway {
    /// Static provider, if it initialized.
    static_source: Option<DynProvider>,

    /// Remote provider, if it initialized.
    remote: Option<DynProvider>,

    /// Whether the remote provider is selected.
    use_remote: RwLock<bool>,
}

impl ResourceGateway {
    /// Creates a gateway from explicit providers.
    pub fn new(
        static_source: Option<DynProvider>,
        remote: Option<DynProvider>,
        use_remote: bool,
    ) -> Self {
        Self {
            static_source,
            remote,
            use_remote: RwLock::new(use_remote),
        }
    }

    /// Builds both providers from configuration.
    ///
    /// A provider that fails to initialize is logged and left unset; calls
    /// routed to it fail with `NoProviderConfigured`.
    pub fn from_config(config: GatewayConfig) -> Self {
        let static_source = match StaticSource::new(config.static_source) {
            Ok(source) => Some(Arc::new(source) as DynProvider),
            Err(e) => {
                warn!(error = %e, "Static source unavailable");
                None
            }
        };
        let remote = match RemoteSource::new(config.remote) {
            Ok(source) => Some(Arc::new(source) as DynProvider),
            Err(e) => {
                warn!(error = %e, "Remote source unavailable");
                None
            }
        };

        let gateway = Self::new(static_source, remote, config.use_remote);
        debug!(provider = %gateway.provider_type(), "Gateway initialized");
        gateway
    }

    /// Selects the remote (`true`) or static (`false`) provider.
    ///
    /// Idempotent. Requests already in flight are not cancelled.
    pub fn set_source(&self, use_remote: bool) {
        let mut selected = self.use_remote.write();
        if *selected != use_remote {
            *selected = use_remote;
            info!(
                provider = if use_remote { "http" } else { "file" },
                "Switched data source"
            );
        }
    }

    /// Flips between the two providers, returning the new kind.
    pub fn toggle_source(&self) -> ProviderKind {
        let mut selected = self.use_remote.write();
        *selected = !*selected;
        let kind = kind_for(*selected);
        info!(provider = %kind, "Switched data source");
        kind
    }

    /// Whether the remote provider is selected.
    pub fn uses_remote(&self) -> bool {
        *self.use_remote.read()
    }

    /// The kind of the selected provider.
    pub fn provider_type(&self) -> ProviderKind {
        kind_for(self.uses_remote())
    }

    /// Lists the records on one page, without the envelope.
    pub async fn list(
        &self,
        resource_type: &str,
        options: &QueryOptions,
    ) -> CatalogResult<Vec<Record>> {
        Ok(self.fetch_all(resource_type, options).await?.records)
    }

    /// Searches `fields` for `term` and returns the first page of matches.
    pub async fn search<S: AsRef<str>>(
        &self,
        resource_type: &str,
        term: &str,
        fields: &[S],
    ) -> CatalogResult<Vec<Record>> {
        let options = QueryOptions::new()
            .with_search(term)
            .with_searchable_fields(fields.iter().map(|f| f.as_ref().to_string()));
        self.list(resource_type, &options).await
    }

    fn active(&self) -> CatalogResult<DynProvider> {
        let slot = if self.uses_remote() {
            &self.remote
        } else {
            &self.static_source
        };
        slot.clone().ok_or(CatalogError::NoProviderConfigured)
    }
}

fn kind_for(use_remote: bool) -> ProviderKind {
    if use_remote {
        ProviderKind::Remote
    } else {
        ProviderKind::Static
    }
}

impl std::fmt::Debug for ResourceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceGateway")
            .field("static_source", &self.static_source.is_some())
            .field("remote", &self.remote.is_some())
            .field("use_remote", &self.uses_remote())
            .finish()
    }
}

#[async_trait]
impl DataProvider for ResourceGateway {
    fn kind(&self) -> ProviderKind {
        self.provider_type()
    }

    #[instrument(skip(self, options))]
    async fn fetch_all(
        &self,
        resource_type: &str,
        options: &QueryOptions,
    ) -> CatalogResult<ResultEnvelope> {
        self.active()?.fetch_all(resource_type, options).await
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, resource_type: &str, id: &str) -> CatalogResult<Record> {
        self.active()?.fetch_by_id(resource_type, id).await
    }

    #[instrument(skip(self))]
    async fn count(&self, resource_type: &str) -> CatalogResult<u64> {
        self.active()?.count(resource_type).await
    }

    async fn health_check(&self) -> bool {
        match self.active() {
            Ok(provider) => provider.health_check().await,
            Err(_) => {
                warn!(provider = %self.provider_type(), "Health check without a provider");
                false
            }
        }
    }
}
