//! Resource discovery port
//!
//! Lists the taggable resources a discovery job should collect metrics for.
//! Cancellation is Rust-native: dropping the returned future aborts the
//! in-flight request.

use async_trait::async_trait;
use stratus_core::{DiscoveryJob, TaggedResource};

/// Resource discovery capability backed by the tagging API
#[async_trait]
pub trait ResourceDiscovery: Send + Sync {
    /// List taggable resources matching the job's discovery criteria in one
    /// region. Any error is fatal for the calling job's discovery phase; a
    /// partial resource list is never usable.
    async fn list_resources(
        &self,
        job: &DiscoveryJob,
        region: &str,
    ) -> Result<Vec<TaggedResource>, DiscoveryError>;
}

/// Discovery-backend failure modes
#[derive(thiserror::Error, Debug)]
pub enum DiscoveryError {
    #[error("discovery request timed out")]
    Timeout,

    #[error("discovery request throttled")]
    Throttled,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("discovery backend error: {0}")]
    Backend(String),
}
