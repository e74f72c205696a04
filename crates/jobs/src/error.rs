//! Engine error types

use stratus_core::DomainError;
use stratus_ports::DiscoveryError;
use thiserror::Error;

/// Failure modes of a job run
#[derive(Error, Debug)]
pub enum JobError {
    /// The caller's context was cancelled; partial results are discarded.
    #[error("job cancelled")]
    Cancelled,

    #[error("resource discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("invalid job spec: {0}")]
    InvalidJob(#[from] DomainError),
}
