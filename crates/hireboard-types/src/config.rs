//! Global configuration types for Hireboard.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory.

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Top-level configuration.
///
/// Loaded from `~/.hireboard/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Upper bound on a single listing query before it fails with "timeout".
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

fn default_query_timeout_secs() -> u64 {
    10
}

impl GlobalConfig {
    /// Query timeout, floored at one second.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs.max(1))
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}
