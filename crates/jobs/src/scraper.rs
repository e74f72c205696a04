//! Scrape orchestration
//!
//! Runs every configured job of one collection pass concurrently: static
//! jobs once each, discovery jobs once per declared region. One failing job
//! only costs its own records; cancellation aborts the whole pass.

use crate::context::JobContext;
use crate::discovery_job::run_discovery_job;
use crate::error::JobError;
use crate::static_job::run_static_job;
use crate::telemetry::ScrapeMetrics;
use futures::future::{join_all, BoxFuture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use stratus_core::{MetricRecord, ScrapeTargets};
use stratus_ports::{MetricClient, ResourceDiscovery};
use tracing::{debug, info, warn};
use uuid::Uuid;

type JobOutcome = (String, Duration, Result<Vec<MetricRecord>, JobError>);

/// Run one full scrape pass over the configured targets.
///
/// Validates the targets, then fans out all jobs concurrently. A discovery
/// failure in one job drops that job's contribution and is counted, never
/// propagated; `JobError::Cancelled` aborts the pass and discards partial
/// output.
pub async fn run_scrape(
    ctx: &JobContext,
    targets: &ScrapeTargets,
    discovery: Arc<dyn ResourceDiscovery>,
    client: Arc<dyn MetricClient>,
    metrics: Option<&ScrapeMetrics>,
) -> Result<Vec<MetricRecord>, JobError> {
    targets.validate()?;
    if ctx.is_cancelled() {
        return Err(JobError::Cancelled);
    }

    let scrape_id = Uuid::new_v4();
    info!(
        %scrape_id,
        static_jobs = targets.static_jobs.len(),
        discovery_jobs = targets.discovery_jobs.len(),
        "starting scrape"
    );

    let mut tasks: Vec<BoxFuture<'_, JobOutcome>> = Vec::new();
    for job in &targets.static_jobs {
        let client = Arc::clone(&client);
        tasks.push(Box::pin(async move {
            let started = Instant::now();
            let result = run_static_job(ctx, job, client).await;
            (format!("static:{}", job.name), started.elapsed(), result)
        }));
    }
    for job in &targets.discovery_jobs {
        for region in &job.regions {
            let discovery = Arc::clone(&discovery);
            let client = Arc::clone(&client);
            tasks.push(Box::pin(async move {
                let started = Instant::now();
                let result = run_discovery_job(ctx, job, region, discovery, client).await;
                (
                    format!("discovery:{}:{region}", job.namespace),
                    started.elapsed(),
                    result,
                )
            }));
        }
    }

    let mut records = Vec::new();
    for (label, elapsed, result) in join_all(tasks).await {
        match result {
            Ok(mut batch) => {
                if let Some(metrics) = metrics {
                    metrics.record_job(batch.len(), elapsed);
                }
                debug!(job = %label, records = batch.len(), "job completed");
                records.append(&mut batch);
            }
            Err(JobError::Cancelled) => return Err(JobError::Cancelled),
            Err(err) => {
                if let Some(metrics) = metrics {
                    metrics.record_discovery_failure();
                }
                warn!(job = %label, error = %err, "job failed, dropping its records");
            }
        }
    }

    info!(%scrape_id, records = records.len(), "scrape finished");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        discovery_job, metric_with_statistics, FailingDiscovery, StubDiscovery, StubMetricClient,
    };
    use stratus_core::{FeatureFlags, Statistic, StaticJob, TaggedResource};
    use tokio_util::sync::CancellationToken;

    fn targets() -> ScrapeTargets {
        ScrapeTargets {
            static_jobs: vec![StaticJob {
                name: "billing".to_string(),
                namespace: "AWS/Billing".to_string(),
                custom_tags: vec![],
                dimensions: vec![],
                metrics: vec![metric_with_statistics("EstimatedCharges", &[Statistic::Maximum])],
            }],
            discovery_jobs: vec![discovery_job(vec![metric_with_statistics(
                "CPUUtilization",
                &[Statistic::Average],
            )])],
        }
    }

    fn ec2_instance() -> TaggedResource {
        TaggedResource {
            arn: "arn:aws:ec2:eu-west-1:123456789012:instance/i-0abc".to_string(),
            namespace: "AWS/EC2".to_string(),
            region: "eu-west-1".to_string(),
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_scrape_combines_static_and_discovery_output() {
        let discovery = Arc::new(StubDiscovery::new(vec![ec2_instance()]));
        let client = Arc::new(StubMetricClient::with_data(&[
            "EstimatedCharges",
            "CPUUtilization",
        ]));
        let metrics = ScrapeMetrics::new().unwrap();

        let records = run_scrape(
            &JobContext::default(),
            &targets(),
            discovery,
            client,
            Some(&metrics),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(metrics.jobs_total.get(), 2);
        assert_eq!(metrics.records_total.get(), 2);
    }

    #[tokio::test]
    async fn test_failed_discovery_does_not_suppress_sibling_jobs() {
        let client = Arc::new(StubMetricClient::with_data(&[
            "EstimatedCharges",
            "CPUUtilization",
        ]));
        let metrics = ScrapeMetrics::new().unwrap();

        let records = run_scrape(
            &JobContext::default(),
            &targets(),
            Arc::new(FailingDiscovery),
            client,
            Some(&metrics),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 1, "only the static job contributes");
        assert_eq!(records[0].metric_name, "EstimatedCharges");
        assert_eq!(metrics.discovery_failures_total.get(), 1);
        assert_eq!(metrics.jobs_total.get(), 1);
    }

    #[tokio::test]
    async fn test_invalid_targets_are_rejected_up_front() {
        let mut bad = targets();
        bad.discovery_jobs[0].regions.clear();

        let result = run_scrape(
            &JobContext::default(),
            &bad,
            Arc::new(StubDiscovery::new(vec![])),
            Arc::new(StubMetricClient::empty()),
            None,
        )
        .await;

        assert!(matches!(result, Err(JobError::InvalidJob(_))));
    }

    #[tokio::test]
    async fn test_cancelled_scrape_returns_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = JobContext::with_cancellation(FeatureFlags::default(), token);

        let result = run_scrape(
            &ctx,
            &targets(),
            Arc::new(StubDiscovery::new(vec![ec2_instance()])),
            Arc::new(StubMetricClient::empty()),
            None,
        )
        .await;

        assert!(matches!(result, Err(JobError::Cancelled)));
    }

    #[tokio::test]
    async fn test_discovery_jobs_run_once_per_region() {
        let mut multi_region = targets();
        multi_region.static_jobs.clear();
        multi_region.discovery_jobs[0].regions =
            vec!["eu-west-1".to_string(), "us-east-1".to_string()];

        let discovery = Arc::new(StubDiscovery::new(vec![ec2_instance()]));
        let client = Arc::new(StubMetricClient::with_data(&["CPUUtilization"]));

        let records = run_scrape(
            &JobContext::default(),
            &multi_region,
            discovery.clone(),
            client,
            None,
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        let mut regions = discovery.regions_queried();
        regions.sort();
        assert_eq!(regions, vec!["eu-west-1".to_string(), "us-east-1".to_string()]);
    }
}
