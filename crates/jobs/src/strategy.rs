//! Retrieval strategy dispatch
//!
//! The strategy is resolved once per unit of work from the call's feature
//! flags and dispatched through one method, so the static and discovery
//! runners share the branch instead of scattering conditionals.

use stratus_core::{
    BatchedQuery, BatchedResult, Dimension, FeatureFlags, LegacyResult, MetricConfig,
    MetricMigrationParams, MetricRecord, RetrievalPayload, Tag, USE_GET_METRIC_DATA_FOR_STATIC,
};
use stratus_ports::MetricClient;

/// Identity shared by every record one fetch unit produces
#[derive(Debug, Clone)]
pub struct FetchTarget {
    pub resource_name: String,
    pub namespace: String,
    pub dimensions: Vec<Dimension>,
    pub tags: Vec<Tag>,
}

/// Where a record's data comes from: enumerated now and fetched later in a
/// batch, or fetched synchronously per metric via the legacy API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalStrategy {
    Batched,
    Legacy,
}

impl RetrievalStrategy {
    /// Resolve the strategy from the feature flags of the current call.
    pub fn resolve(flags: &FeatureFlags) -> Self {
        if flags.enabled(USE_GET_METRIC_DATA_FOR_STATIC) {
            Self::Batched
        } else {
            Self::Legacy
        }
    }

    /// Produce the records for one (resource, metric) unit of work.
    ///
    /// Batched: one record per requested statistic, data left unset for the
    /// batch-fetch phase; no remote call is made. Legacy: exactly one
    /// remote call covering all statistics; no record when the call returns
    /// no data.
    pub async fn collect(
        self,
        client: &dyn MetricClient,
        target: &FetchTarget,
        metric: &MetricConfig,
    ) -> Vec<MetricRecord> {
        let migration = MetricMigrationParams::from(metric);
        match self {
            Self::Batched => metric
                .statistics
                .iter()
                .cloned()
                .map(|statistic| MetricRecord {
                    metric_name: metric.name.clone(),
                    resource_name: target.resource_name.clone(),
                    namespace: target.namespace.clone(),
                    dimensions: target.dimensions.clone(),
                    tags: target.tags.clone(),
                    migration,
                    payload: RetrievalPayload::Batched {
                        query: BatchedQuery {
                            period: metric.period,
                            length: metric.length,
                            delay: metric.delay,
                            statistic: statistic.clone(),
                        },
                        result: BatchedResult::pending(statistic),
                    },
                })
                .collect(),
            Self::Legacy => {
                let datapoints = client
                    .get_metric_statistics(&target.dimensions, &target.namespace, metric)
                    .await;
                match datapoints {
                    Some(datapoints) => vec![MetricRecord {
                        metric_name: metric.name.clone(),
                        resource_name: target.resource_name.clone(),
                        namespace: target.namespace.clone(),
                        dimensions: target.dimensions.clone(),
                        tags: target.tags.clone(),
                        migration,
                        payload: RetrievalPayload::Legacy(LegacyResult {
                            statistics: metric.statistics.clone(),
                            datapoints,
                        }),
                    }],
                    None => Vec::new(),
                }
            }
        }
    }
}
