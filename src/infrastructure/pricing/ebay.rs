use crate::domain::ports::marketplace::AdapterError;
use crate::domain::ports::price_lookup::PriceLookup;
use crate::domain::values::market_price::MarketPriceEstimate;
use async_trait::async_trait;
use tracing::debug;

/// eBay sold-price lookup via the Finding API (`findCompletedItems`).
/// Requires an app ID in `LOCALFLIP_EBAY_APP_TOKEN`; without one the
/// facade wires the noop lookup instead.
pub struct EbayPriceLookup {
    app_token: String,
    base_url: String,
    client: reqwest::Client,
}

impl EbayPriceLookup {
    pub fn new(app_token: String) -> Self {
        Self {
            app_token,
            base_url: "https://svcs.ebay.com/services/search/FindingService/v1".into(),
            client: reqwest::Client::builder()
                .user_agent("localflip/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var("LOCALFLIP_EBAY_APP_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(Self::new)
    }

    /// Mean sold price and sample count from a Finding API response.
    /// Returns the empty estimate when the response carries no items.
    fn parse_response(body: &serde_json::Value) -> MarketPriceEstimate {
        let items = body
            .pointer("/findCompletedItemsResponse/0/searchResult/0/item")
            .and_then(|v| v.as_array());

        let Some(items) = items else {
            return MarketPriceEstimate::empty();
        };

        let prices: Vec<f64> = items
            .iter()
            .filter_map(|item| {
                item.pointer("/sellingStatus/0/currentPrice/0/__value__")
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.parse::<f64>().ok())
            })
            .filter(|p| *p > 0.0)
            .collect();

        if prices.is_empty() {
            return MarketPriceEstimate::empty();
        }

        let average = prices.iter().sum::<f64>() / prices.len() as f64;
        MarketPriceEstimate::new((average * 100.0).round() / 100.0, prices.len() as u32)
    }
}

#[async_trait]
impl PriceLookup for EbayPriceLookup {
    fn name(&self) -> &'static str {
        "ebay"
    }

    async fn estimate(&self, title: &str) -> Result<MarketPriceEstimate, AdapterError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("OPERATION-NAME", "findCompletedItems"),
                ("SERVICE-VERSION", "1.13.0"),
                ("SECURITY-APPNAME", self.app_token.as_str()),
                ("RESPONSE-DATA-FORMAT", "JSON"),
                ("keywords", title),
                ("itemFilter(0).name", "SoldItemsOnly"),
                ("itemFilter(0).value", "true"),
                ("paginationInput.entriesPerPage", "25"),
            ])
            .send()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AdapterError::Network(format!(
                "eBay Finding API returned {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AdapterError::Parse(e.to_string()))?;

        let estimate = Self::parse_response(&body);
        debug!(
            title,
            average = estimate.average_sold_price,
            samples = estimate.sample_size,
            "ebay sold price estimate"
        );
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_with_items() {
        let body = serde_json::json!({
            "findCompletedItemsResponse": [{
                "searchResult": [{
                    "item": [
                        {"sellingStatus": [{"currentPrice": [{"__value__": "300.00"}]}]},
                        {"sellingStatus": [{"currentPrice": [{"__value__": "350.00"}]}]}
                    ]
                }]
            }]
        });
        let est = EbayPriceLookup::parse_response(&body);
        assert_eq!(est.sample_size, 2);
        assert!((est.average_sold_price - 325.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_response_empty_result() {
        let body = serde_json::json!({
            "findCompletedItemsResponse": [{"searchResult": [{}]}]
        });
        let est = EbayPriceLookup::parse_response(&body);
        assert!(!est.has_data());
    }

    #[test]
    fn test_parse_response_malformed_prices_skipped() {
        let body = serde_json::json!({
            "findCompletedItemsResponse": [{
                "searchResult": [{
                    "item": [
                        {"sellingStatus": [{"currentPrice": [{"__value__": "not-a-number"}]}]},
                        {"sellingStatus": [{"currentPrice": [{"__value__": "200.00"}]}]}
                    ]
                }]
            }]
        });
        let est = EbayPriceLookup::parse_response(&body);
        assert_eq!(est.sample_size, 1);
        assert!((est.average_sold_price - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_from_env_absent_token() {
        std::env::remove_var("LOCALFLIP_EBAY_APP_TOKEN");
        assert!(EbayPriceLookup::from_env().is_none());
    }
}
