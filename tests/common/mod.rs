//! Shared test helpers: stub marketplaces and price lookups so the full
//! pipeline runs without any network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use localflip::domain::entities::listing::RawListing;
use localflip::domain::entities::search_config::SearchConfig;
use localflip::domain::ports::marketplace::{AdapterError, Marketplace};
use localflip::domain::ports::price_lookup::PriceLookup;
use localflip::domain::values::market_price::MarketPriceEstimate;
use localflip::infrastructure::pricing::noop::NoopPriceLookup;
use localflip::LocalFlip;

pub fn listing(source: &str, title: &str, price: Option<f64>) -> RawListing {
    RawListing {
        source: source.to_string(),
        title: title.to_string(),
        price,
        location: "Redding, CA".to_string(),
        url: format!("https://example.org/{}", title.replace(' ', "-")),
        body: None,
    }
}

/// Returns the same listings for every query.
pub struct StubMarketplace {
    pub source: &'static str,
    pub listings: Vec<RawListing>,
    /// When true, only participates if the run opts into facebook.
    pub gated: bool,
}

impl StubMarketplace {
    pub fn new(source: &'static str, listings: Vec<RawListing>) -> Self {
        Self {
            source,
            listings,
            gated: false,
        }
    }
}

#[async_trait::async_trait]
impl Marketplace for StubMarketplace {
    fn name(&self) -> &'static str {
        self.source
    }

    fn enabled(&self, config: &SearchConfig) -> bool {
        !self.gated || config.include_facebook
    }

    async fn search(
        &self,
        _query: &str,
        _config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError> {
        Ok(self.listings.clone())
    }
}

/// Returns listings keyed by the exact query string.
pub struct PerQueryMarketplace {
    pub source: &'static str,
    pub by_query: HashMap<String, Vec<RawListing>>,
}

#[async_trait::async_trait]
impl Marketplace for PerQueryMarketplace {
    fn name(&self) -> &'static str {
        self.source
    }

    async fn search(
        &self,
        query: &str,
        _config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError> {
        Ok(self.by_query.get(query).cloned().unwrap_or_default())
    }
}

/// Always fails, for adapter-failure degradation tests.
pub struct FailingMarketplace;

#[async_trait::async_trait]
impl Marketplace for FailingMarketplace {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn search(
        &self,
        _query: &str,
        _config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError> {
        Err(AdapterError::Network("connection refused".to_string()))
    }
}

/// Returns the same estimate for every title.
pub struct FixedPriceLookup(pub MarketPriceEstimate);

#[async_trait::async_trait]
impl PriceLookup for FixedPriceLookup {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn estimate(&self, _title: &str) -> Result<MarketPriceEstimate, AdapterError> {
        Ok(self.0.clone())
    }
}

/// Always fails, for lookup-degradation tests.
pub struct FailingPriceLookup;

#[async_trait::async_trait]
impl PriceLookup for FailingPriceLookup {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn estimate(&self, _title: &str) -> Result<MarketPriceEstimate, AdapterError> {
        Err(AdapterError::Network("timeout".to_string()))
    }
}

pub fn setup(marketplaces: Vec<Arc<dyn Marketplace>>) -> LocalFlip {
    LocalFlip::with_providers(":memory:", marketplaces, Arc::new(NoopPriceLookup)).unwrap()
}

pub fn setup_with_prices(
    marketplaces: Vec<Arc<dyn Marketplace>>,
    prices: Arc<dyn PriceLookup>,
) -> LocalFlip {
    LocalFlip::with_providers(":memory:", marketplaces, prices).unwrap()
}
