//! Static job runner
//!
//! One fetch unit per declared metric, launched eagerly; the unit count is
//! bounded by configuration, not by external input volume.

use crate::context::JobContext;
use crate::error::JobError;
use crate::fanout;
use crate::sink::ResultSink;
use crate::strategy::{FetchTarget, RetrievalStrategy};
use std::sync::Arc;
use stratus_core::{MetricRecord, StaticJob};
use stratus_ports::MetricClient;
use tracing::instrument;

/// Run one statically configured job.
///
/// Every unit deep-copies the job's dimensions, resolves the retrieval
/// strategy from the context's feature flags, and appends its records
/// through a lock scoped to the append alone; the legacy remote call always
/// runs outside it. The returned order is completion order and carries no
/// meaning. A cancelled context yields `JobError::Cancelled` and partial
/// output is discarded.
#[instrument(skip_all, fields(job = %job.name, namespace = %job.namespace))]
pub async fn run_static_job(
    ctx: &JobContext,
    job: &StaticJob,
    client: Arc<dyn MetricClient>,
) -> Result<Vec<MetricRecord>, JobError> {
    let sink = Arc::new(ResultSink::default());

    let units: Vec<_> = job
        .metrics
        .iter()
        .map(|metric| {
            let ctx = ctx.clone();
            let client = Arc::clone(&client);
            let sink = Arc::clone(&sink);
            let metric = metric.clone();
            let target = FetchTarget {
                resource_name: job.name.clone(),
                namespace: job.namespace.clone(),
                dimensions: job.dimensions.clone(),
                tags: job.custom_tags.clone(),
            };
            async move {
                let strategy = RetrievalStrategy::resolve(ctx.flags());
                let records = tokio::select! {
                    records = strategy.collect(client.as_ref(), &target, &metric) => records,
                    _ = ctx.cancel_token().cancelled() => return,
                };
                sink.append(records);
            }
        })
        .collect();

    fanout::run_units(ctx, units).await?;
    Ok(sink.take())
}
