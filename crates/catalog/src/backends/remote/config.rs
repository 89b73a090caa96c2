//! Configuration for the remote source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogResult, ConfigError};

/// Default API base URL (the hosted mock API).
pub const DEFAULT_BASE_URL: &str = "https://685eca617b57aebd2afa9bc9.mockapi.io/api/v1";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Built-in resource type to endpoint path mapping.
pub const DEFAULT_ENDPOINTS: &[(&str, &str)] = &[
    ("business-roles", "/business-roles"),
    ("application-roles", "/application-roles"),
    ("azure-licenses", "/azure-licenses"),
    ("azure-admin-roles", "/azure-admin-roles"),
    ("azure-rbac-roles", "/azure-rbac-roles"),
    ("management-roles", "/management-roles"),
    ("mailboxes", "/mailboxes"),
    ("computers", "/computers"),
    ("users", "/users"),
    ("shared-folders", "/shared-folders"),
];

/// Configuration for [`RemoteSource`](super::RemoteSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSourceConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Timeout for a whole request, including reading the body.
    pub timeout_ms: u64,

    /// Extra request headers, applied over the JSON defaults.
    pub headers: BTreeMap<String, String>,

    /// Endpoint path overrides by resource type.
    pub endpoints: BTreeMap<String, String>,
}

impl Default for RemoteSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers: BTreeMap::new(),
            endpoints: BTreeMap::new(),
        }
    }
}

impl RemoteSourceConfig {
    /// Creates a configuration for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Adds a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Overrides the endpoint path for a resource type.
    pub fn with_endpoint(
        mut self,
        resource_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.endpoints.insert(resource_type.into(), path.into());
        self
    }

    /// Resolves the endpoint path for a resource type.
    ///
    /// Unmapped types fall back to `/<resource_type>`.
    pub fn endpoint_for(&self, resource_type: &str) -> String {
        if let Some(path) = self.endpoints.get(resource_type) {
            return path.clone();
        }
        DEFAULT_ENDPOINTS
            .iter()
            .find(|(key, _)| *key == resource_type)
            .map(|(_, path)| path.to_string())
            .unwrap_or_else(|| format!("/{resource_type}"))
    }

    /// Validates configuration invariants.
    pub fn validate(&self) -> CatalogResult<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(invalid("base_url", "must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(
                "base_url",
                format!("unsupported scheme in '{base_url}', expected http or https"),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(invalid("timeout_ms", "must be > 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> crate::error::CatalogError {
    ConfigError::Invalid {
        field: field.to_string(),
        message: message.into(),
    }
    .into()
}
