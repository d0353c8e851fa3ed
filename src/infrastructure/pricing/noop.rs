use crate::domain::ports::marketplace::AdapterError;
use crate::domain::ports::price_lookup::PriceLookup;
use crate::domain::values::market_price::MarketPriceEstimate;

/// Default price lookup when no external pricing API is configured.
/// Always returns the empty estimate, which puts the pipeline in raw mode.
pub struct NoopPriceLookup;

#[async_trait::async_trait]
impl PriceLookup for NoopPriceLookup {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn estimate(&self, _title: &str) -> Result<MarketPriceEstimate, AdapterError> {
        Ok(MarketPriceEstimate::empty())
    }
}
