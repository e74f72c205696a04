//! End-to-end run of a discovery job against the no-op discovery adapter

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use stratus_adapters::NoopDiscovery;
use stratus_core::{Datapoint, Dimension, DiscoveryJob, MetricConfig, MetricRecord, Statistic};
use stratus_jobs::{run_discovery_job, JobContext};
use stratus_ports::{MetricClient, MetricClientError};

struct PanickingClient;

#[async_trait]
impl MetricClient for PanickingClient {
    async fn get_metric_statistics(
        &self,
        _dimensions: &[Dimension],
        _namespace: &str,
        _metric: &MetricConfig,
    ) -> Option<Vec<Datapoint>> {
        unreachable!("no resources are discovered, so no metric may be fetched")
    }

    async fn get_metric_data(
        &self,
        _records: &mut [MetricRecord],
        _namespace: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<(), MetricClientError> {
        unreachable!("no resources are discovered, so no batch may be fetched")
    }
}

#[tokio::test]
async fn disabled_discovery_yields_an_empty_scrape() {
    let job = DiscoveryJob {
        namespace: "AWS/EC2".to_string(),
        regions: vec!["eu-west-1".to_string()],
        search_tags: vec![],
        custom_tags: vec![],
        resource_id_dimension: "InstanceId".to_string(),
        metrics: vec![MetricConfig {
            name: "CPUUtilization".to_string(),
            statistics: vec![Statistic::Average],
            period: 60,
            length: 300,
            delay: 0,
            nil_to_zero: false,
            add_timestamp: false,
        }],
    };

    let records = run_discovery_job(
        &JobContext::default(),
        &job,
        "eu-west-1",
        Arc::new(NoopDiscovery),
        Arc::new(PanickingClient),
    )
    .await
    .unwrap();

    assert!(records.is_empty());
}
