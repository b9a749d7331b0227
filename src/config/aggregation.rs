use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tuning of the per-modem queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct AggregationConfig {
    /// Refresh rate, in seconds, requested from the extended signal interface
    /// before LTE metrics are read.
    pub signal_refresh_rate_secs: u32,

    /// Upper bound, in milliseconds, on each remote query of a modem.
    pub sub_query_timeout_ms: u64,

    /// How many modems are queried at the same time. `1` queries them strictly
    /// one after another.
    pub max_concurrent_devices: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            signal_refresh_rate_secs: 10,
            sub_query_timeout_ms: 5_000,
            max_concurrent_devices: 4,
        }
    }
}

impl AggregationConfig {
    /// Per-query timeout as a [`Duration`].
    pub fn sub_query_timeout(&self) -> Duration {
        Duration::from_millis(self.sub_query_timeout_ms)
    }
}
