//! Adapters - Infrastructure Implementations
//!
//! Network-free implementations of the infrastructure concerns the engine
//! composes with: service endpoint resolution from the environment and the
//! no-op discovery client used when tagging is disabled.

pub mod endpoints;
pub mod noop_discovery;

pub use crate::endpoints::{
    alias_table, canonical_key, canonical_keys, load_endpoint_overrides,
    load_endpoint_overrides_from_env, EndpointOverrideMap,
};
pub use crate::noop_discovery::NoopDiscovery;
