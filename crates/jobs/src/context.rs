//! Per-call execution context

use stratus_core::FeatureFlags;
use tokio_util::sync::CancellationToken;

/// Carries the resolved feature flags and the cancellation signal for one
/// job run.
///
/// Cheap to clone; every fetch unit re-reads the flags from its context
/// instead of caching a strategy decision per process.
#[derive(Debug, Clone, Default)]
pub struct JobContext {
    flags: FeatureFlags,
    cancel: CancellationToken,
}

impl JobContext {
    pub fn new(flags: FeatureFlags) -> Self {
        Self {
            flags,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(flags: FeatureFlags, cancel: CancellationToken) -> Self {
        Self { flags, cancel }
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
