//! Remote data source.
//!
//! Talks to the catalog REST API over HTTP. Every request carries JSON
//! `Content-Type` and `Accept` headers and is bounded by a single timeout
//! covering the whole exchange. Failures are classified into
//! [`RemoteError`](crate::error::RemoteError) variants:
//!
//! | Condition                     | Error          |
//! |-------------------------------|----------------|
//! | timer elapsed                 | `Timeout`      |
//! | no response (refused, DNS...) | `Network`      |
//! | 401                           | `Unauthorized` |
//! | 403                           | `Forbidden`    |
//! | 404                           | `NotFound`     |
//! | 500                           | `ServerError`  |
//! | any other non-2xx             | `Unexpected`   |
//!
//! `fetch_all` treats a 404 as an empty collection; the other operations
//! propagate it.

mod client;
mod config;
mod provider;

pub use config::{DEFAULT_BASE_URL, DEFAULT_ENDPOINTS, DEFAULT_TIMEOUT_MS, RemoteSourceConfig};
pub use provider::RemoteSource;
