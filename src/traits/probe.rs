use async_trait::async_trait;

use crate::error::Result;

/// An independent health check against one external backend.
///
/// A probe is a zero-argument connectivity test: it opens whatever resource
/// it needs, verifies the backend answers, and releases the resource on every
/// exit path before returning. Probes own no shared mutable state, so any
/// number of them can run concurrently.
///
/// Probes are expected to enforce their own timeout; the aggregator only
/// applies an optional cooperative cancellation signal on top.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Check that the backend is reachable.
    /// A descriptive error means unreachable or misconfigured.
    async fn check(&self) -> Result<()>;
}
