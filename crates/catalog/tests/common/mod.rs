//! Common test utilities for provider integration tests.
//!
//! [`MockApi`] runs an in-process axum server on an ephemeral port that
//! imitates the catalog REST API, including its failure modes.

#![allow(dead_code)]

use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use access_catalog::backends::static_source::StaticSourceConfig;
use access_catalog::{RemoteSource, RemoteSourceConfig, StaticSource};

/// How long the `/slow` endpoint stalls before answering.
pub const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// A running mock API server. Aborted on drop.
pub struct MockApi {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl MockApi {
    /// Starts the standard catalog mock.
    pub async fn start() -> Self {
        Self::serve(catalog_router()).await
    }

    /// Starts a server for an arbitrary router.
    pub async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock API failed");
        });
        Self {
            base_url: format!("http://{addr}/api/v1"),
            handle,
        }
    }

    /// A remote source pointed at this server.
    pub fn source(&self) -> RemoteSource {
        self.source_with(|config| config)
    }

    /// A remote source pointed at this server, with config tweaks.
    pub fn source_with(
        &self,
        tweak: impl FnOnce(RemoteSourceConfig) -> RemoteSourceConfig,
    ) -> RemoteSource {
        RemoteSource::new(tweak(RemoteSourceConfig::new(&self.base_url)))
            .expect("Failed to create remote source")
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Records served by the mock `/computers` endpoint.
pub fn remote_computers() -> Value {
    json!([
        {"id": "1", "name": "LAPTOP-101", "owner": "Patrick Parker", "endDate": "2025-06-01T09:00:00.000Z"},
        {"id": "2", "name": "DESKTOP-102", "owner": "Alice Wong", "endDate": "2024-01-15T17:30:00.000Z"},
        {"id": "3", "name": "LAPTOP-103", "owner": null, "endDate": "2026-02-28T08:00:00.000Z"},
        {"id": "4", "name": "SERVER-104", "owner": "Patrick Parker", "endDate": "2023-11-30T12:00:00.000Z"}
    ])
}

fn catalog_router() -> Router {
    Router::new()
        .route("/api/v1/health", get(|| async { Json(json!({"status": "ok"})) }))
        .route("/api/v1/computers", get(|| async { Json(remote_computers()) }))
        .route("/api/v1/computers/count", get(|| async { Json(json!({"count": 4})) }))
        .route("/api/v1/computers/{id}", get(computer_by_id))
        .route("/api/v1/users", get(|| async { Json(json!([])) }))
        .route("/api/v1/business-roles", get(|| async { StatusCode::UNAUTHORIZED }))
        .route("/api/v1/application-roles", get(|| async { StatusCode::FORBIDDEN }))
        .route(
            "/api/v1/azure-licenses",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/v1/azure-admin-roles",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route(
            "/api/v1/shared-folders",
            get(|| async { Json(json!({"items": []})) }),
        )
        .route("/api/v1/echo-headers", get(echo_headers))
        .route(
            "/api/v1/echo-ids/{id}",
            get(|Path(id): Path<String>| async move { Json(json!({"id": id})) }),
        )
        .route(
            "/api/v1/slow",
            get(|| async {
                tokio::time::sleep(SLOW_RESPONSE).await;
                Json(json!([]))
            }),
        )
}

async fn computer_by_id(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    remote_computers()
        .as_array()
        .and_then(|records| records.iter().find(|r| r["id"] == id.as_str()).cloned())
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Json(json!([{
        "id": "1",
        "contentType": header("content-type"),
        "accept": header("accept"),
        "apiKey": header("x-api-key"),
    }]))
}

/// A static source over the bundled datasets with no simulated latency.
pub fn bundled_source() -> StaticSource {
    StaticSource::new(StaticSourceConfig::without_delay()).expect("Failed to load bundled data")
}

/// An address nothing is listening on.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}
