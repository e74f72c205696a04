//! No-op resource discovery
//!
//! Used when tagging-based discovery is administratively disabled. The
//! engine stays agnostic: the full port contract is honored, the answer is
//! just always empty.

use async_trait::async_trait;
use stratus_core::{DiscoveryJob, TaggedResource};
use stratus_ports::{DiscoveryError, ResourceDiscovery};
use tracing::debug;

/// Discovery client that never returns resources
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiscovery;

#[async_trait]
impl ResourceDiscovery for NoopDiscovery {
    async fn list_resources(
        &self,
        job: &DiscoveryJob,
        region: &str,
    ) -> Result<Vec<TaggedResource>, DiscoveryError> {
        debug!(namespace = %job.namespace, region, "tagging disabled, skipping resource discovery");
        Ok(Vec::new())
    }
}
