//! Ports - Capability Contracts
//!
//! This crate defines the traits the job execution engine consumes. The
//! real network clients implement them in the infrastructure layer; the
//! engine stays agnostic to which implementation is wired in.

pub mod discovery;
pub mod metric_client;

pub use crate::discovery::{DiscoveryError, ResourceDiscovery};
pub use crate::metric_client::{MetricClient, MetricClientError};
