//! Error types for the catalog data access layer.
//!
//! Errors are grouped by where they originate: the resource registry of a
//! provider, the remote HTTP transport, configuration, and the gateway itself.
//! [`CatalogError`] wraps all of them so every provider operation returns the
//! same [`CatalogResult`].

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all provider and gateway operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Resource lookup errors raised by a provider.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Errors from the remote HTTP source.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Invalid configuration or bundled data.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gateway has no provider for the selected source.
    #[error("no data provider configured")]
    NoProviderConfigured,
}

/// Errors related to resource lookup.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No collection is registered under this resource type key.
    #[error("unknown resource type: {resource_type}")]
    UnknownResourceType { resource_type: String },

    /// No record in the collection carries the requested identifier.
    #[error("resource not found: {resource_type} with ID {id}")]
    NotFound { resource_type: String, id: String },
}

/// Errors raised while talking to the remote API.
///
/// The display strings are the user-facing messages shown by the catalog UI.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The request did not complete before the configured timeout.
    #[error("Request timed out. Please try again.")]
    Timeout { url: String, timeout_ms: u64 },

    /// The transport failed before any response was received.
    #[error("Network error. Please check your connection.")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 401.
    #[error("Unauthorized access.")]
    Unauthorized { url: String },

    /// HTTP 403.
    #[error("Access forbidden.")]
    Forbidden { url: String },

    /// HTTP 404.
    #[error("Resource not found.")]
    NotFound { url: String },

    /// HTTP 500.
    #[error("Server error. Please try again later.")]
    ServerError { url: String },

    /// Any other non-success status.
    #[error("An unexpected error occurred.")]
    Unexpected { url: String, status: u16 },

    /// The request URL could not be built.
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// The response body was not the expected JSON shape.
    #[error("invalid response payload from {url}: {message}")]
    InvalidPayload { url: String, message: String },
}

/// Errors related to configuration and bundled data.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of range or malformed.
    #[error("invalid configuration for {field}: {message}")]
    Invalid { field: String, message: String },

    /// A data file could not be read or decoded.
    #[error("failed to load dataset '{name}': {message}")]
    Dataset { name: String, message: String },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Returns true for the remote not-found case that `fetch_all` downgrades
    /// to an empty page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Remote(RemoteError::NotFound { .. }))
    }

    /// Returns true if the operation failed because the remote timer elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Remote(RemoteError::Timeout { .. }))
    }

    /// Returns true if a static source rejected the resource type key.
    pub fn is_unknown_resource_type(&self) -> bool {
        matches!(
            self,
            CatalogError::Resource(ResourceError::UnknownResourceType { .. })
        )
    }
}

impl RemoteError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        match status {
            401 => RemoteError::Unauthorized { url },
            403 => RemoteError::Forbidden { url },
            404 => RemoteError::NotFound { url },
            500 => RemoteError::ServerError { url },
            _ => RemoteError::Unexpected { url, status },
        }
    }

    /// The URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            RemoteError::Timeout { url, .. }
            | RemoteError::Network { url, .. }
            | RemoteError::Unauthorized { url }
            | RemoteError::Forbidden { url }
            | RemoteError::NotFound { url }
            | RemoteError::ServerError { url }
            | RemoteError::Unexpected { url, .. }
            | RemoteError::InvalidUrl { url, .. }
            | RemoteError::InvalidPayload { url, .. } => url,
        }
    }
}
