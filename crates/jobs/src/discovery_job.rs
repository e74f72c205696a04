//! Discovery job runner
//!
//! Same aggregation and locking contract as the static runner, generalized
//! over a dynamically discovered resource set: one fetch unit per discovered
//! resource × metric.

use crate::context::JobContext;
use crate::error::JobError;
use crate::fanout;
use crate::sink::ResultSink;
use crate::strategy::{FetchTarget, RetrievalStrategy};
use std::sync::Arc;
use stratus_core::{Dimension, DiscoveryJob, MetricRecord};
use stratus_ports::{MetricClient, ResourceDiscovery};
use tracing::{debug, instrument};

/// Run one discovery job in one region.
///
/// The discovery phase is fatal on error: no partial resource list is
/// usable. Discovered resources are filtered by the job's search tags, then
/// every resource × metric pair becomes an independent fetch unit following
/// the same strategy branch and append lock as the static runner.
#[instrument(skip_all, fields(namespace = %job.namespace, region = %region))]
pub async fn run_discovery_job(
    ctx: &JobContext,
    job: &DiscoveryJob,
    region: &str,
    discovery: Arc<dyn ResourceDiscovery>,
    client: Arc<dyn MetricClient>,
) -> Result<Vec<MetricRecord>, JobError> {
    if ctx.is_cancelled() {
        return Err(JobError::Cancelled);
    }

    let resources = tokio::select! {
        resources = discovery.list_resources(job, region) => resources?,
        _ = ctx.cancel_token().cancelled() => return Err(JobError::Cancelled),
    };

    let matching: Vec<_> = resources
        .into_iter()
        .filter(|resource| resource.matches_tags(&job.search_tags))
        .collect();
    if matching.is_empty() {
        debug!("no resources matched discovery criteria");
        return Ok(Vec::new());
    }
    debug!(resources = matching.len(), "discovered resources");

    let sink = Arc::new(ResultSink::default());
    let mut units = Vec::with_capacity(matching.len() * job.metrics.len());
    for resource in &matching {
        for metric in &job.metrics {
            let ctx = ctx.clone();
            let client = Arc::clone(&client);
            let sink = Arc::clone(&sink);
            let metric = metric.clone();
            let mut tags = resource.tags.clone();
            tags.extend(job.custom_tags.iter().cloned());
            let target = FetchTarget {
                resource_name: resource.resource_name().to_string(),
                namespace: job.namespace.clone(),
                dimensions: vec![Dimension::new(
                    job.resource_id_dimension.clone(),
                    resource.resource_name(),
                )],
                tags,
            };
            units.push(async move {
                let strategy = RetrievalStrategy::resolve(ctx.flags());
                let records = tokio::select! {
                    records = strategy.collect(client.as_ref(), &target, &metric) => records,
                    _ = ctx.cancel_token().cancelled() => return,
                };
                sink.append(records);
            });
        }
    }

    fanout::run_units(ctx, units).await?;
    Ok(sink.take())
}
