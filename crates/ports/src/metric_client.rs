//! Remote metric client port
//!
//! One capability covering both competing retrieval APIs, so the engine can
//! branch per feature flag without caring which concrete client is wired in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stratus_core::{Datapoint, Dimension, MetricConfig, MetricRecord};

/// Remote metric retrieval capability
#[async_trait]
pub trait MetricClient: Send + Sync {
    /// Legacy single-call statistics API; one call covers every statistic
    /// the metric requests.
    ///
    /// `None` means "no data" — callers cannot distinguish an empty answer
    /// from a failed call at this layer. The implementation owns its own
    /// error logging and retries.
    async fn get_metric_statistics(
        &self,
        dimensions: &[Dimension],
        namespace: &str,
        metric: &MetricConfig,
    ) -> Option<Vec<Datapoint>>;

    /// Batched data API. Fills the `Batched` payloads of the given records
    /// in place; consumed by the downstream batch-fetch phase, never by the
    /// enumeration pass.
    async fn get_metric_data(
        &self,
        records: &mut [MetricRecord],
        namespace: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(), MetricClientError>;
}

/// Batch-phase failure modes
#[derive(thiserror::Error, Debug)]
pub enum MetricClientError {
    #[error("request throttled by remote API")]
    Throttled,

    #[error("remote API error: {0}")]
    Backend(String),
}
