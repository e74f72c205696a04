//! Metric value objects
//!
//! Dimensions, statistic selectors, and the datapoints returned by the
//! legacy statistics API.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name/value pair identifying a metric's sub-resource axis.
///
/// Immutable once constructed; always deep-copied when derived from a job
/// specification so concurrent fetch units never alias shared storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// CloudWatch statistic selector
///
/// Percentiles keep their wire spelling (`p99`, `p99.9`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Statistic {
    Average,
    Sum,
    Maximum,
    Minimum,
    SampleCount,
    Percentile(String),
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Average => f.write_str("Average"),
            Self::Sum => f.write_str("Sum"),
            Self::Maximum => f.write_str("Maximum"),
            Self::Minimum => f.write_str("Minimum"),
            Self::SampleCount => f.write_str("SampleCount"),
            Self::Percentile(p) => f.write_str(p),
        }
    }
}

impl FromStr for Statistic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Average" => Ok(Self::Average),
            "Sum" => Ok(Self::Sum),
            "Maximum" => Ok(Self::Maximum),
            "Minimum" => Ok(Self::Minimum),
            "SampleCount" => Ok(Self::SampleCount),
            other => match other.strip_prefix('p') {
                Some(q)
                    if !q.is_empty() && q.chars().all(|c| c.is_ascii_digit() || c == '.') =>
                {
                    Ok(Self::Percentile(other.to_string()))
                }
                _ => Err(DomainError::UnknownStatistic(other.to_string())),
            },
        }
    }
}

impl TryFrom<String> for Statistic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Statistic> for String {
    fn from(s: Statistic) -> Self {
        s.to_string()
    }
}

/// One sample returned by the legacy statistics API.
///
/// Only the requested statistics are populated; the rest stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    pub timestamp: DateTime<Utc>,
    pub average: Option<f64>,
    pub sum: Option<f64>,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
    pub sample_count: Option<f64>,
}

impl Datapoint {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            average: None,
            sum: None,
            maximum: None,
            minimum: None,
            sample_count: None,
        }
    }
}
