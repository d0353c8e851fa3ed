//! Market price lookup port.

use crate::domain::ports::marketplace::AdapterError;
use crate::domain::values::market_price::MarketPriceEstimate;
use async_trait::async_trait;

/// Looks up an average sold price for a listing title.
///
/// Implementations return [`MarketPriceEstimate::empty`] when they find no
/// data; an `Err` is reserved for transport-level failures. Either way the
/// pipeline degrades that one listing to zero-price-data mode instead of
/// aborting the batch.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    fn name(&self) -> &'static str;

    async fn estimate(&self, title: &str) -> Result<MarketPriceEstimate, AdapterError>;
}
