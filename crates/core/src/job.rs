//! Job specifications
//!
//! Declared by the operator and loaded by an external configuration layer;
//! the engine treats them as read-only inputs and never mutates them.

use crate::error::DomainError;
use crate::metric::{Dimension, Statistic};
use crate::resource::Tag;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Per-metric specification shared by static and discovery jobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    pub name: String,
    pub statistics: Vec<Statistic>,
    /// Sampling period of the windowed query, in seconds
    pub period: i64,
    /// Length of the query window, in seconds
    pub length: i64,
    /// How far behind real time the window ends, in seconds
    pub delay: i64,
    #[serde(default)]
    pub nil_to_zero: bool,
    #[serde(default)]
    pub add_timestamp: bool,
}

impl MetricConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(DomainError::Validation("metric name cannot be empty".to_string()));
        }
        if self.statistics.is_empty() {
            return Err(DomainError::Validation(format!(
                "metric {} declares no statistics",
                self.name
            )));
        }
        if self.period <= 0 {
            return Err(DomainError::Validation(format!(
                "metric {} declares a non-positive period",
                self.name
            )));
        }
        Ok(())
    }
}

/// A user-declared unit of work: fixed resource, fixed dimensions, fixed
/// metric list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticJob {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub custom_tags: Vec<Tag>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<MetricConfig>,
}

impl StaticJob {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(DomainError::Validation("static job name cannot be empty".to_string()));
        }
        if self.namespace.is_empty() {
            return Err(DomainError::Validation(format!(
                "static job {} declares no namespace",
                self.name
            )));
        }
        for metric in &self.metrics {
            metric.validate()?;
        }
        Ok(())
    }
}

/// A job whose resource set is discovered at run time via the tagging API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryJob {
    pub namespace: String,
    pub regions: Vec<String>,
    #[serde(default)]
    pub search_tags: Vec<Tag>,
    #[serde(default)]
    pub custom_tags: Vec<Tag>,
    /// Dimension name a discovered resource is addressed by, e.g. `InstanceId`
    pub resource_id_dimension: String,
    pub metrics: Vec<MetricConfig>,
}

impl DiscoveryJob {
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(DomainError::Validation(
                "discovery job declares no namespace".to_string(),
            ));
        }
        if self.regions.is_empty() {
            return Err(DomainError::Validation(format!(
                "discovery job {} declares no regions",
                self.namespace
            )));
        }
        if self.resource_id_dimension.is_empty() {
            return Err(DomainError::Validation(format!(
                "discovery job {} declares no resource id dimension",
                self.namespace
            )));
        }
        for metric in &self.metrics {
            metric.validate()?;
        }
        Ok(())
    }
}

/// Everything one scrape pass runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeTargets {
    #[serde(default)]
    pub static_jobs: Vec<StaticJob>,
    #[serde(default)]
    pub discovery_jobs: Vec<DiscoveryJob>,
}

impl ScrapeTargets {
    pub fn validate(&self) -> Result<()> {
        for job in &self.static_jobs {
            job.validate()?;
        }
        for job in &self.discovery_jobs {
            job.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str) -> MetricConfig {
        MetricConfig {
            name: name.to_string(),
            statistics: vec![Statistic::Average],
            period: 60,
            length: 300,
            delay: 0,
            nil_to_zero: false,
            add_timestamp: false,
        }
    }

    #[test]
    fn test_metric_config_validation() {
        assert!(metric("CPUUtilization").validate().is_ok());

        let nameless = metric("");
        assert!(nameless.validate().is_err());

        let mut no_stats = metric("NetworkIn");
        no_stats.statistics.clear();
        assert!(no_stats.validate().is_err());

        let mut bad_period = metric("NetworkOut");
        bad_period.period = 0;
        assert!(bad_period.validate().is_err());
    }

    #[test]
    fn test_static_job_validation() {
        let job = StaticJob {
            name: "billing".to_string(),
            namespace: "AWS/Billing".to_string(),
            custom_tags: vec![],
            dimensions: vec![],
            metrics: vec![metric("EstimatedCharges")],
        };
        assert!(job.validate().is_ok());

        let mut no_namespace = job.clone();
        no_namespace.namespace.clear();
        assert!(no_namespace.validate().is_err());
    }

    #[test]
    fn test_discovery_job_requires_regions_and_id_dimension() {
        let job = DiscoveryJob {
            namespace: "AWS/EC2".to_string(),
            regions: vec!["eu-west-1".to_string()],
            search_tags: vec![],
            custom_tags: vec![],
            resource_id_dimension: "InstanceId".to_string(),
            metrics: vec![metric("CPUUtilization")],
        };
        assert!(job.validate().is_ok());

        let mut no_regions = job.clone();
        no_regions.regions.clear();
        assert!(no_regions.validate().is_err());

        let mut no_id = job;
        no_id.resource_id_dimension.clear();
        assert!(no_id.validate().is_err());
    }
}
