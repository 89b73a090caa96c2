//! Configuration for the static source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default simulated latency in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Configuration for [`StaticSource`](super::StaticSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticSourceConfig {
    /// Artificial latency applied before every operation, emulating a network
    /// round trip. Zero disables it.
    pub delay_ms: u64,

    /// Optional directory of extra `<resource-type>.json` datasets loaded on
    /// top of the bundled ones.
    pub data_dir: Option<PathBuf>,
}

impl Default for StaticSourceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            data_dir: None,
        }
    }
}

impl StaticSourceConfig {
    /// A configuration with no simulated latency.
    pub fn without_delay() -> Self {
        Self {
            delay_ms: 0,
            ..Default::default()
        }
    }
}
