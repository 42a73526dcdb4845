use std::future::Future;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Probe;

/// Adapter turning an async closure into a [`Probe`].
///
/// The blob storage, key-value cache, and AI backends expose their
/// connectivity checks through their own clients; this wrapper lets those
/// opaque capabilities be registered in a probe set without a dedicated
/// type each. Also handy for tests.
///
/// # Example
/// ```
/// use sitecheck::probes::FnProbe;
///
/// let probe = FnProbe::new(|| async { Ok(()) });
/// ```
pub struct FnProbe<F> {
    check: F,
}

impl<F, Fut> FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send,
{
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F, Fut> Probe for FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send,
{
    async fn check(&self) -> Result<()> {
        (self.check)().await
    }
}
