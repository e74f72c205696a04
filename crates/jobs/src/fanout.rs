//! Concurrent unit scheduling shared by the job runners
//!
//! Both runners fan out through this helper so the aggregation, join, and
//! cancellation contract is defined in exactly one place.

use crate::context::JobContext;
use crate::error::JobError;
use futures::future::join_all;
use std::future::Future;
use tracing::warn;

/// Spawn one tokio task per unit, wait for all of them, and map a cancelled
/// context to an error after the join.
///
/// Units observe the cancellation token themselves and wind down quickly
/// after a cancel; whatever they appended before that is discarded by the
/// caller, never returned.
pub(crate) async fn run_units<F>(ctx: &JobContext, units: Vec<F>) -> Result<(), JobError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if ctx.is_cancelled() {
        return Err(JobError::Cancelled);
    }

    let handles: Vec<_> = units.into_iter().map(tokio::spawn).collect();
    for joined in join_all(handles).await {
        if let Err(err) = joined {
            warn!(error = %err, "fetch unit aborted");
        }
    }

    if ctx.is_cancelled() {
        return Err(JobError::Cancelled);
    }
    Ok(())
}
