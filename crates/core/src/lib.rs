//! Domain Core - Shared Model for Metric Collection
//!
//! This crate contains the domain entities and value objects shared by the
//! job execution engine, the capability ports, and the adapters: job
//! specifications, dimensions and statistics, discovered resources, and the
//! retrieval records handed to the exposition stage.

pub mod error;
pub mod flags;
pub mod job;
pub mod metric;
pub mod record;
pub mod resource;

pub use crate::error::DomainError;
pub use crate::flags::{FeatureFlags, USE_GET_METRIC_DATA_FOR_STATIC};
pub use crate::job::{DiscoveryJob, MetricConfig, ScrapeTargets, StaticJob};
pub use crate::metric::{Datapoint, Dimension, Statistic};
pub use crate::record::{
    BatchedQuery, BatchedResult, LegacyResult, MetricMigrationParams, MetricRecord,
    RetrievalPayload,
};
pub use crate::resource::{Tag, TaggedResource};

/// Result alias for domain-level failures
pub type Result<T> = std::result::Result<T, DomainError>;
