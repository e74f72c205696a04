//! Runtime feature flags
//!
//! Flags are resolved by the caller (CLI or configuration file) and injected
//! into the engine through the execution context. The engine re-reads them
//! for every unit of work instead of caching a decision per process.

use std::collections::HashSet;

/// Route static jobs through the batched GetMetricData API instead of the
/// legacy GetMetricStatistics API.
pub const USE_GET_METRIC_DATA_FOR_STATIC: &str = "use-getmetricdata-for-static";

/// Set of enabled feature flag names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: HashSet<String>,
}

impl FeatureFlags {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn enable(&mut self, name: &str) {
        self.enabled.insert(name.to_string());
    }

    pub fn enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }
}
