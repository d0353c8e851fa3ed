//! Deal candidates, filtering, enrichment, and ranking.
//!
//! A [`DealCandidate`] pairs a raw listing with whatever external market
//! data is available; [`DealRow`] is the fully enriched, flat record the
//! exporters consume. Enrichment never mutates a candidate — it produces
//! a new row with the derived fields appended.

use crate::domain::entities::listing::RawListing;
use crate::domain::values::condition::{parse_condition, ConditionLabel};
use crate::domain::values::demand::demand_score;
use crate::domain::values::market_price::MarketPriceEstimate;
use crate::domain::values::round2;
use crate::domain::values::seller::rate_seller;
use crate::domain::values::valuation::estimate_market_value_and_profit;
use serde::Serialize;
use std::cmp::Ordering;

/// A listing paired with its market price estimate and the profit fields
/// derived from the two. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct DealCandidate {
    pub listing: RawListing,
    pub market: MarketPriceEstimate,
    /// External-price profit: average sold minus local ask. Zero when the
    /// market estimate carries no data.
    pub estimated_profit: f64,
    /// External-price margin percent. Zero when no market data.
    pub profit_margin_pct: f64,
}

impl DealCandidate {
    /// Build a candidate from a listing and an (possibly empty) estimate.
    ///
    /// Returns `None` only when the listing lacks a usable price — that is
    /// the one way a listing silently drops out of the pipeline. Absent
    /// market data is not a failure: the external profit fields default to
    /// zero so the pipeline still runs in raw mode.
    pub fn build(listing: RawListing, market: MarketPriceEstimate) -> Option<Self> {
        let price = listing.price.filter(|p| *p >= 0.0)?;

        let (estimated_profit, profit_margin_pct) = if market.has_data() {
            let profit = market.average_sold_price - price;
            let margin = profit / market.average_sold_price * 100.0;
            (round2(profit), round2(margin))
        } else {
            (0.0, 0.0)
        };

        Some(Self {
            listing,
            market,
            estimated_profit,
            profit_margin_pct,
        })
    }
}

/// Keep candidates meeting both thresholds. With both thresholds at zero
/// this is the identity function — the default raw-mode behavior.
pub fn filter_deals(
    candidates: Vec<DealCandidate>,
    min_profit: f64,
    min_margin_pct: f64,
) -> Vec<DealCandidate> {
    candidates
        .into_iter()
        .filter(|d| d.estimated_profit >= min_profit && d.profit_margin_pct >= min_margin_pct)
        .collect()
}

/// Fully enriched deal record — one flat row per deal, with the fixed
/// field set the export sinks rely on. Field order here is the CSV column
/// order; keep it stable.
#[derive(Debug, Clone, Serialize)]
pub struct DealRow {
    /// Originating search term, set when aggregating multiple terms.
    pub search_term: Option<String>,
    pub source: String,
    pub title: String,
    pub location: String,
    pub local_price: f64,
    pub market_avg_sold: f64,
    pub est_profit_market: f64,
    pub profit_margin_pct: f64,
    pub market_samples: u32,
    pub condition_label: ConditionLabel,
    pub condition_score: f64,
    pub seller_rating: f64,
    pub rule_market_value: f64,
    pub rule_profit: f64,
    pub travel_cost: f64,
    /// Rule profit minus travel cost — the economic ranking key.
    pub effective_profit: f64,
    pub demand_score: f64,
    pub listing_url: String,
    pub market_search_url: String,
}

impl DealRow {
    /// Run every enrichment stage over a surviving candidate.
    ///
    /// All stages are pure functions of the candidate text and numbers, so
    /// enriching the same candidate twice yields identical rows.
    pub fn enrich(candidate: &DealCandidate, category_hint: &str, travel_cost: f64) -> Self {
        let listing = &candidate.listing;
        let text = listing.scored_text();
        let local_price = listing.price.unwrap_or(0.0);

        let condition = parse_condition(&text);
        let seller = rate_seller(&text);
        let valuation = estimate_market_value_and_profit(local_price, condition.score);
        let demand = demand_score(
            &listing.title,
            category_hint,
            condition.score,
            valuation.rule_profit,
        );

        Self {
            search_term: None,
            source: listing.source.clone(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            local_price,
            market_avg_sold: candidate.market.average_sold_price,
            est_profit_market: candidate.estimated_profit,
            profit_margin_pct: candidate.profit_margin_pct,
            market_samples: candidate.market.sample_size,
            condition_label: condition.label,
            condition_score: condition.score,
            seller_rating: seller.rating,
            rule_market_value: valuation.market_value,
            rule_profit: valuation.rule_profit,
            travel_cost,
            effective_profit: round2(valuation.rule_profit - travel_cost),
            demand_score: demand,
            listing_url: listing.url.clone(),
            market_search_url: market_search_url(&listing.title),
        }
    }
}

/// eBay sold-listings search link for a title, for manual price checking.
pub fn market_search_url(title: &str) -> String {
    format!(
        "https://www.ebay.com/sch/i.html?_nkw={}",
        title.replace(' ', "+")
    )
}

/// Sort rows descending by (demand score, effective profit). The sort is
/// stable, so rows tied on both keys keep their input order.
pub fn rank_deals(rows: &mut [DealRow]) {
    rows.sort_by(|a, b| {
        b.demand_score
            .partial_cmp(&a.demand_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.effective_profit
                    .partial_cmp(&a.effective_profit)
                    .unwrap_or(Ordering::Equal)
            })
    });
}

/// Merge per-term result sets into one ranked sequence, tagging each row
/// with its originating term before the merged sort. Lossless: every input
/// row appears in the output exactly once.
pub fn aggregate_terms(per_term: Vec<(String, Vec<DealRow>)>) -> Vec<DealRow> {
    let mut merged = Vec::new();
    for (term, mut rows) in per_term {
        for row in &mut rows {
            row.search_term = Some(term.clone());
        }
        merged.append(&mut rows);
    }
    rank_deals(&mut merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: Option<f64>) -> RawListing {
        RawListing {
            source: "craigslist".into(),
            title: title.into(),
            price,
            location: "Redding, CA".into(),
            url: "https://example.org/1".into(),
            body: None,
        }
    }

    fn raw_candidate(title: &str, price: f64) -> DealCandidate {
        DealCandidate::build(listing(title, Some(price)), MarketPriceEstimate::empty()).unwrap()
    }

    #[test]
    fn test_build_without_price_yields_none() {
        let result = DealCandidate::build(listing("PS5", None), MarketPriceEstimate::empty());
        assert!(result.is_none());
    }

    #[test]
    fn test_build_without_market_data_zeroes_external_fields() {
        let deal = raw_candidate("PS5", 250.0);
        assert_eq!(deal.estimated_profit, 0.0);
        assert_eq!(deal.profit_margin_pct, 0.0);
    }

    #[test]
    fn test_build_with_market_data() {
        let deal = DealCandidate::build(
            listing("PS5", Some(250.0)),
            MarketPriceEstimate::new(400.0, 20),
        )
        .unwrap();
        assert!((deal.estimated_profit - 150.0).abs() < 0.01);
        assert!((deal.profit_margin_pct - 37.5).abs() < 0.01);
    }

    #[test]
    fn test_free_listing_is_a_candidate() {
        let deal = DealCandidate::build(listing("free couch", Some(0.0)), MarketPriceEstimate::empty());
        assert!(deal.is_some());
    }

    #[test]
    fn test_zero_thresholds_filter_is_identity() {
        let deals = vec![
            raw_candidate("a", 10.0),
            raw_candidate("b", 20.0),
            raw_candidate("c", 30.0),
        ];
        let titles: Vec<String> = deals.iter().map(|d| d.listing.title.clone()).collect();
        let kept = filter_deals(deals, 0.0, 0.0);
        let kept_titles: Vec<String> = kept.iter().map(|d| d.listing.title.clone()).collect();
        assert_eq!(kept_titles, titles);
    }

    #[test]
    fn test_filter_applies_both_thresholds() {
        let rich = DealCandidate::build(
            listing("good deal", Some(100.0)),
            MarketPriceEstimate::new(300.0, 10),
        )
        .unwrap();
        let thin = DealCandidate::build(
            listing("thin deal", Some(280.0)),
            MarketPriceEstimate::new(300.0, 10),
        )
        .unwrap();
        let kept = filter_deals(vec![rich, thin], 50.0, 20.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].listing.title, "good deal");
    }

    #[test]
    fn test_raw_mode_candidates_fail_nonzero_thresholds() {
        let deals = vec![raw_candidate("a", 10.0)];
        assert!(filter_deals(deals, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let deal = raw_candidate("PS5 console good condition", 250.0);
        let a = DealRow::enrich(&deal, "ps5", 20.45);
        let b = DealRow::enrich(&deal, "ps5", 20.45);
        assert_eq!(a.demand_score, b.demand_score);
        assert_eq!(a.effective_profit, b.effective_profit);
        assert_eq!(a.condition_score, b.condition_score);
    }

    #[test]
    fn test_enrich_populates_derived_fields() {
        let deal = raw_candidate("PS5 console good condition", 250.0);
        let row = DealRow::enrich(&deal, "ps5", 20.45);
        assert_eq!(row.condition_label, ConditionLabel::Good);
        assert!(row.rule_market_value > 250.0);
        assert!((row.effective_profit - (row.rule_profit - 20.45)).abs() < 0.01);
        assert!(row.search_term.is_none());
        assert!(row.market_search_url.contains("ebay.com"));
        assert!(row.market_search_url.contains("PS5+console"));
    }

    fn row(demand: f64, effective: f64, title: &str) -> DealRow {
        let deal = raw_candidate(title, 100.0);
        let mut r = DealRow::enrich(&deal, "", 0.0);
        r.demand_score = demand;
        r.effective_profit = effective;
        r
    }

    #[test]
    fn test_rank_two_key_ordering() {
        let mut rows = vec![
            row(0.5, 10.0, "a"),
            row(0.9, -5.0, "b"),
            row(0.5, 30.0, "c"),
        ];
        rank_deals(&mut rows);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_is_stable_on_full_ties() {
        let mut rows = vec![row(0.5, 10.0, "first"), row(0.5, 10.0, "second")];
        rank_deals(&mut rows);
        assert_eq!(rows[0].title, "first");
        assert_eq!(rows[1].title, "second");
    }

    #[test]
    fn test_aggregate_tags_and_sorts() {
        let ps5_rows = vec![row(0.4, 5.0, "ps5 deal")];
        let bike_rows = vec![row(0.8, 5.0, "bike deal")];
        let merged = aggregate_terms(vec![
            ("ps5".to_string(), ps5_rows),
            ("bike".to_string(), bike_rows),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "bike deal");
        assert_eq!(merged[0].search_term.as_deref(), Some("bike"));
        assert_eq!(merged[1].search_term.as_deref(), Some("ps5"));
    }

    #[test]
    fn test_aggregate_order_independent_of_input_sequence() {
        let forward = aggregate_terms(vec![
            ("a".to_string(), vec![row(0.4, 5.0, "low")]),
            ("b".to_string(), vec![row(0.8, 5.0, "high")]),
        ]);
        let backward = aggregate_terms(vec![
            ("b".to_string(), vec![row(0.8, 5.0, "high")]),
            ("a".to_string(), vec![row(0.4, 5.0, "low")]),
        ]);
        let f: Vec<&str> = forward.iter().map(|r| r.title.as_str()).collect();
        let b: Vec<&str> = backward.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(f, b);
    }
}
