//! Scan use case — the full arbitrage pipeline for one or many search terms.
//!
//! Flow per term: marketplace adapters produce raw listings → deal
//! candidate builder (per listing, with the external price lookup) → deal
//! filter (batch) → per-deal enrichment → ranking. The travel cost is
//! computed once per configuration and shared across every deal in the run.
//!
//! Failure policy: a failing source or price lookup never aborts the run.
//! Sources degrade to zero listings, lookups degrade that one listing to
//! the empty estimate. Only configuration violations are fatal.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::deal::{
    aggregate_terms, filter_deals, rank_deals, DealCandidate, DealRow,
};
use crate::domain::entities::listing::RawListing;
use crate::domain::entities::search_config::SearchConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::marketplace::Marketplace;
use crate::domain::ports::price_lookup::PriceLookup;
use crate::domain::values::market_price::MarketPriceEstimate;
use crate::domain::values::travel::travel_cost;

/// Result of one scan run.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    /// Search terms this run covered (one for a single scan).
    pub terms: Vec<String>,
    pub listings_fetched: usize,
    pub candidates_built: usize,
    pub candidates_passing_filter: usize,
    /// Sources that failed and contributed zero listings.
    pub sources_failed: Vec<String>,
    /// Shared round-trip travel cost for this configuration.
    pub travel_cost: f64,
    pub rows: Vec<DealRow>,
}

#[derive(Default)]
struct TermScan {
    rows: Vec<DealRow>,
    listings_fetched: usize,
    candidates_built: usize,
    sources_failed: Vec<String>,
}

pub struct ScanUseCase {
    marketplaces: Vec<Arc<dyn Marketplace>>,
    prices: Arc<dyn PriceLookup>,
}

impl ScanUseCase {
    pub fn new(marketplaces: Vec<Arc<dyn Marketplace>>, prices: Arc<dyn PriceLookup>) -> Self {
        Self {
            marketplaces,
            prices,
        }
    }

    /// Run the pipeline for a single search term.
    pub async fn execute(
        &self,
        config: &SearchConfig,
        query: &str,
    ) -> Result<ScanReport, DomainError> {
        config.validate()?;
        let cost = travel_cost(config.radius_miles, config.mpg, config.gas_price);

        let mut scan = self.scan_term(config, query, cost).await;
        rank_deals(&mut scan.rows);

        info!(
            term = query,
            listings = scan.listings_fetched,
            deals = scan.rows.len(),
            "scan complete"
        );

        Ok(ScanReport {
            scanned_at: Utc::now(),
            terms: vec![query.to_string()],
            listings_fetched: scan.listings_fetched,
            candidates_built: scan.candidates_built,
            candidates_passing_filter: scan.rows.len(),
            sources_failed: scan.sources_failed,
            travel_cost: cost,
            rows: scan.rows,
        })
    }

    /// Run the pipeline per term and merge into one ranked result set.
    /// Each row is tagged with its originating term before the merged sort.
    pub async fn execute_terms(
        &self,
        config: &SearchConfig,
        terms: &[String],
    ) -> Result<ScanReport, DomainError> {
        config.validate()?;
        if terms.is_empty() {
            return Err(DomainError::InvalidInput(
                "no search terms to scan".into(),
            ));
        }
        let cost = travel_cost(config.radius_miles, config.mpg, config.gas_price);

        let mut listings_fetched = 0;
        let mut candidates_built = 0;
        let mut sources_failed = Vec::new();
        let mut per_term = Vec::new();

        for term in terms {
            let scan = self.scan_term(config, term, cost).await;
            listings_fetched += scan.listings_fetched;
            candidates_built += scan.candidates_built;
            sources_failed.extend(scan.sources_failed);
            per_term.push((term.clone(), scan.rows));
        }

        let rows = aggregate_terms(per_term);

        info!(
            terms = terms.len(),
            deals = rows.len(),
            "aggregated scan complete"
        );

        Ok(ScanReport {
            scanned_at: Utc::now(),
            terms: terms.to_vec(),
            listings_fetched,
            candidates_built,
            candidates_passing_filter: rows.len(),
            sources_failed,
            travel_cost: cost,
            rows,
        })
    }

    async fn scan_term(&self, config: &SearchConfig, term: &str, cost: f64) -> TermScan {
        let mut scan = TermScan::default();

        let listings = self.fetch_listings(config, term, &mut scan.sources_failed).await;
        scan.listings_fetched = listings.len();

        let mut candidates = Vec::new();
        for listing in listings {
            let estimate = match self.prices.estimate(&listing.title).await {
                Ok(est) => est,
                Err(e) => {
                    // Soft: this listing runs in zero-price-data mode.
                    warn!(
                        lookup = self.prices.name(),
                        title = %listing.title,
                        error = %e,
                        "price lookup failed"
                    );
                    MarketPriceEstimate::empty()
                }
            };
            if let Some(candidate) = DealCandidate::build(listing, estimate) {
                candidates.push(candidate);
            }
        }
        scan.candidates_built = candidates.len();

        let surviving = filter_deals(candidates, config.min_profit, config.min_margin_pct);
        scan.rows = surviving
            .iter()
            .map(|c| DealRow::enrich(c, term, cost))
            .collect();
        scan
    }

    async fn fetch_listings(
        &self,
        config: &SearchConfig,
        term: &str,
        sources_failed: &mut Vec<String>,
    ) -> Vec<RawListing> {
        let mut listings = Vec::new();

        for market in &self.marketplaces {
            if !market.enabled(config) {
                debug!(source = market.name(), "source disabled for this run");
                continue;
            }
            match market.search(term, config).await {
                Ok(mut found) => {
                    found.truncate(config.max_results);
                    listings.append(&mut found);
                }
                Err(e) => {
                    warn!(source = market.name(), error = %e, "marketplace search failed");
                    sources_failed.push(market.name().to_string());
                }
            }
        }

        // Price ceiling applies regardless of what the adapter supports.
        if let Some(ceiling) = config.max_price {
            listings.retain(|l| l.price.map(|p| p <= ceiling).unwrap_or(true));
        }

        listings
    }
}
