//! Retrieval result records
//!
//! One `MetricRecord` is produced per (resource, metric, statistic) under
//! the batched strategy, or per (resource, metric) under the legacy
//! strategy. Records are allocated by the engine and handed fully owned to
//! the downstream aggregation stage.

use crate::job::MetricConfig;
use crate::metric::{Datapoint, Dimension, Statistic};
use crate::resource::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-record flags controlling null substitution and timestamp decoration,
/// carried unchanged from the metric spec into every derived record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricMigrationParams {
    pub nil_to_zero: bool,
    pub add_timestamp: bool,
}

impl From<&MetricConfig> for MetricMigrationParams {
    fn from(metric: &MetricConfig) -> Self {
        Self {
            nil_to_zero: metric.nil_to_zero,
            add_timestamp: metric.add_timestamp,
        }
    }
}

/// Windowed query parameters for one batched data request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchedQuery {
    pub period: i64,
    pub length: i64,
    pub delay: i64,
    pub statistic: Statistic,
}

/// Slot for the batched API's answer, filled by the batch-fetch phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchedResult {
    pub statistic: Statistic,
    pub datapoint: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl BatchedResult {
    /// Empty slot for a statistic, awaiting the batch-fetch phase
    pub fn pending(statistic: Statistic) -> Self {
        Self {
            statistic,
            datapoint: None,
            timestamp: None,
        }
    }
}

/// Synchronously fetched answer from the legacy statistics API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyResult {
    pub statistics: Vec<Statistic>,
    pub datapoints: Vec<Datapoint>,
}

/// Exactly one retrieval outcome kind per record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RetrievalPayload {
    Batched {
        query: BatchedQuery,
        result: BatchedResult,
    },
    Legacy(LegacyResult),
}

impl RetrievalPayload {
    pub fn is_batched(&self) -> bool {
        matches!(self, Self::Batched { .. })
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// The target statistic of a batched payload
    pub fn statistic(&self) -> Option<&Statistic> {
        match self {
            Self::Batched { result, .. } => Some(&result.statistic),
            Self::Legacy(_) => None,
        }
    }
}

/// One output record ready for the downstream aggregation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub metric_name: String,
    pub resource_name: String,
    pub namespace: String,
    pub dimensions: Vec<Dimension>,
    pub tags: Vec<Tag>,
    pub migration: MetricMigrationParams,
    pub payload: RetrievalPayload,
}
