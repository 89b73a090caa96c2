//! Top-level configuration for the catalog gateway.

use serde::{Deserialize, Serialize};

use crate::backends::{RemoteSourceConfig, StaticSourceConfig};
use crate::error::CatalogResult;

/// Configuration for [`ResourceGateway`](crate::gateway::ResourceGateway).
///
/// Both providers are configured up front so the active source can be
/// switched at runtime without rebuilding anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Start on the remote source instead of the static one.
    pub use_remote: bool,

    /// Static source settings.
    pub static_source: StaticSourceConfig,

    /// Remote source settings.
    pub remote: RemoteSourceConfig,
}

impl GatewayConfig {
    /// Selects the initial source.
    pub fn with_remote(mut self, use_remote: bool) -> Self {
        self.use_remote = use_remote;
        self
    }

    /// Validates the nested configurations.
    pub fn validate(&self) -> CatalogResult<()> {
        self.remote.validate()
    }
}
