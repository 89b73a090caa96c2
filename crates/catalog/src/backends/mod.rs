//! Data provider implementations.
//!
//! - [`static_source`]: bundled datasets served from memory
//! - [`remote`]: the catalog REST API

pub mod remote;
pub mod static_source;

pub use remote::{RemoteSource, RemoteSourceConfig};
pub use static_source::{StaticSource, StaticSourceConfig};
