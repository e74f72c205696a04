//! Shared test doubles for the engine's unit tests

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use stratus_core::{
    Datapoint, Dimension, DiscoveryJob, MetricConfig, MetricRecord, RetrievalPayload, Statistic,
    TaggedResource,
};
use stratus_ports::{
    DiscoveryError, MetricClient, MetricClientError, ResourceDiscovery,
};

pub(crate) fn metric_with_statistics(name: &str, statistics: &[Statistic]) -> MetricConfig {
    MetricConfig {
        name: name.to_string(),
        statistics: statistics.to_vec(),
        period: 60,
        length: 300,
        delay: 0,
        nil_to_zero: false,
        add_timestamp: false,
    }
}

pub(crate) fn discovery_job(metrics: Vec<MetricConfig>) -> DiscoveryJob {
    DiscoveryJob {
        namespace: "AWS/EC2".to_string(),
        regions: vec!["eu-west-1".to_string()],
        search_tags: vec![],
        custom_tags: vec![],
        resource_id_dimension: "InstanceId".to_string(),
        metrics,
    }
}

fn sample_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Metric client answering from a fixed table and recording every call
pub(crate) struct StubMetricClient {
    responses: HashMap<String, Vec<Datapoint>>,
    calls: Mutex<Vec<String>>,
}

impl StubMetricClient {
    /// Client with no data; every legacy call answers `None`.
    pub(crate) fn empty() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Client answering one datapoint for each named metric.
    pub(crate) fn with_data(names: &[&str]) -> Self {
        let responses = names
            .iter()
            .map(|&name| {
                let mut datapoint = Datapoint::at(sample_timestamp());
                datapoint.average = Some(42.0);
                (name.to_string(), vec![datapoint])
            })
            .collect();
        Self {
            responses,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Metric names the legacy API was called for, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MetricClient for StubMetricClient {
    async fn get_metric_statistics(
        &self,
        _dimensions: &[Dimension],
        _namespace: &str,
        metric: &MetricConfig,
    ) -> Option<Vec<Datapoint>> {
        self.calls.lock().push(metric.name.clone());
        self.responses.get(&metric.name).cloned()
    }

    async fn get_metric_data(
        &self,
        records: &mut [MetricRecord],
        _namespace: &str,
        _start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(), MetricClientError> {
        for record in records.iter_mut() {
            if let RetrievalPayload::Batched { result, .. } = &mut record.payload {
                result.datapoint = Some(1.0);
                result.timestamp = Some(end);
            }
        }
        Ok(())
    }
}

/// Metric client whose legacy call never completes; used to verify that
/// cancellation interrupts an in-flight remote call.
pub(crate) struct HangingMetricClient;

#[async_trait]
impl MetricClient for HangingMetricClient {
    async fn get_metric_statistics(
        &self,
        _dimensions: &[Dimension],
        _namespace: &str,
        _metric: &MetricConfig,
    ) -> Option<Vec<Datapoint>> {
        std::future::pending().await
    }

    async fn get_metric_data(
        &self,
        _records: &mut [MetricRecord],
        _namespace: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<(), MetricClientError> {
        std::future::pending().await
    }
}

/// Discovery client returning a fixed resource list and recording regions
pub(crate) struct StubDiscovery {
    resources: Vec<TaggedResource>,
    regions: Mutex<Vec<String>>,
}

impl StubDiscovery {
    pub(crate) fn new(resources: Vec<TaggedResource>) -> Self {
        Self {
            resources,
            regions: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn regions_queried(&self) -> Vec<String> {
        self.regions.lock().clone()
    }
}

#[async_trait]
impl ResourceDiscovery for StubDiscovery {
    async fn list_resources(
        &self,
        _job: &DiscoveryJob,
        region: &str,
    ) -> Result<Vec<TaggedResource>, DiscoveryError> {
        self.regions.lock().push(region.to_string());
        Ok(self.resources.clone())
    }
}

/// Discovery client that always fails
pub(crate) struct FailingDiscovery;

#[async_trait]
impl ResourceDiscovery for FailingDiscovery {
    async fn list_resources(
        &self,
        _job: &DiscoveryJob,
        _region: &str,
    ) -> Result<Vec<TaggedResource>, DiscoveryError> {
        Err(DiscoveryError::Backend("simulated outage".to_string()))
    }
}
