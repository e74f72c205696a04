//! Exporter self-instrumentation
//!
//! Prometheus metrics describing the engine's own scrape behavior,
//! registered into a caller-supplied registry.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};
use std::time::Duration;

/// Scrape-level metrics for the exporter itself
#[derive(Debug, Clone)]
pub struct ScrapeMetrics {
    pub jobs_total: IntCounter,
    pub records_total: IntCounter,
    pub discovery_failures_total: IntCounter,
    pub job_duration_seconds: Histogram,
}

impl ScrapeMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let jobs_total = IntCounter::new(
            "stratus_scrape_jobs_total",
            "Total number of jobs executed across all scrapes",
        )?;

        let records_total = IntCounter::new(
            "stratus_scrape_records_total",
            "Total number of metric records produced",
        )?;

        let discovery_failures_total = IntCounter::new(
            "stratus_discovery_failures_total",
            "Total number of failed resource discovery phases",
        )?;

        let job_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "stratus_job_duration_seconds",
                "Wall-clock duration of job runs in seconds",
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0]),
        )?;

        Ok(Self {
            jobs_total,
            records_total,
            discovery_failures_total,
            job_duration_seconds,
        })
    }

    /// Register all metrics with a Prometheus registry
    pub fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        registry.register(Box::new(self.jobs_total.clone()))?;
        registry.register(Box::new(self.records_total.clone()))?;
        registry.register(Box::new(self.discovery_failures_total.clone()))?;
        registry.register(Box::new(self.job_duration_seconds.clone()))?;
        Ok(())
    }

    /// Record one completed job run
    pub fn record_job(&self, records: usize, duration: Duration) {
        self.jobs_total.inc();
        self.records_total.inc_by(records as u64);
        self.job_duration_seconds.observe(duration.as_secs_f64());
    }

    /// Record one failed discovery phase
    pub fn record_discovery_failure(&self) {
        self.discovery_failures_total.inc();
    }
}
