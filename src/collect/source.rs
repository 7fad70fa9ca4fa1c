use async_trait::async_trait;

use crate::collect::error::CollectError;
use crate::collect::items::CollectorResult;

/// One configured source of digest items.
///
/// Implementations hold their own slice of the configuration and need no
/// further input per pass.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Stable source identifier, matching [`CollectorResult::source`].
    fn source(&self) -> &'static str;

    /// Gathers everything new from this source.
    async fn collect(&self) -> Result<CollectorResult, CollectError>;
}
