//! HTTP transport for the remote source.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{CatalogResult, ConfigError, RemoteError};

use super::config::RemoteSourceConfig;

/// A JSON-over-HTTP client with a per-request timeout.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpClient {
    pub(crate) fn new(config: &RemoteSourceConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| ConfigError::Invalid {
            field: "http_client".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            headers: build_headers(config)?,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET <base_url><path>` and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = self.url(path)?;
        self.fetch_json(url).await
    }

    /// Issues `GET <base_url><path>/<segment>`.
    pub(crate) async fn get_json_at<T: DeserializeOwned>(
        &self,
        path: &str,
        segment: &str,
    ) -> Result<T, RemoteError> {
        let url = self.item_url(path, segment)?;
        self.fetch_json(url).await
    }

    fn url(&self, path: &str) -> Result<Url, RemoteError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| RemoteError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }

    /// Appends `segment` percent-encoded, so it always stays a single path
    /// segment.
    fn item_url(&self, path: &str, segment: &str) -> Result<Url, RemoteError> {
        let mut url = self.url(path)?;
        let appended = url
            .path_segments_mut()
            .map(|mut segments| {
                segments.pop_if_empty().push(segment);
            })
            .is_ok();
        if !appended {
            return Err(RemoteError::InvalidUrl {
                url: url.to_string(),
                message: "URL cannot have path segments".to_string(),
            });
        }
        Ok(url)
    }

    /// The timer covers sending the request and reading the body. When it
    /// elapses the in-flight request is dropped and `Timeout` is returned.
    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        let display_url = url.to_string();
        debug!(url = %display_url, "Making request");

        let request = async {
            let response = self
                .client
                .get(url)
                .headers(self.headers.clone())
                .send()
                .await
                .map_err(|source| RemoteError::Network {
                    url: display_url.clone(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RemoteError::from_status(display_url.clone(), status.as_u16()));
            }

            let body = response.bytes().await.map_err(|source| RemoteError::Network {
                url: display_url.clone(),
                source,
            })?;
            serde_json::from_slice::<T>(&body).map_err(|e| RemoteError::InvalidPayload {
                url: display_url.clone(),
                message: e.to_string(),
            })
        };

        let outcome = tokio::time::timeout(self.timeout, request).await;
        match outcome {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout {
                url: display_url,
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

fn build_headers(config: &RemoteSourceConfig) -> CatalogResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in &config.headers {
        let invalid = |message: String| ConfigError::Invalid {
            field: format!("headers.{name}"),
            message,
        };
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
