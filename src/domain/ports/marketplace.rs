//! Marketplace adapter port.
//!
//! Adapters pull raw listings from an external site. They tag each listing
//! with their source identifier and make no ordering guarantee — ranking
//! is a pure function of content, never arrival order.

use crate::domain::entities::listing::RawListing;
use crate::domain::entities::search_config::SearchConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Adapter-level failure. Always recoverable at the pipeline boundary:
/// a failing source contributes zero listings and the run continues.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait Marketplace: Send + Sync {
    /// Source identifier stamped onto every listing, e.g. "craigslist".
    fn name(&self) -> &'static str;

    /// Whether this source participates in a run with the given
    /// configuration. Used to gate optional sources.
    fn enabled(&self, _config: &SearchConfig) -> bool {
        true
    }

    /// Search the marketplace for a query. Implementations apply the
    /// configuration's region, radius, and result cap where the site
    /// supports them; the pipeline re-applies the price ceiling and the
    /// per-source cap regardless.
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError>;
}
