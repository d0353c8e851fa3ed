use crate::domain::entities::listing::RawListing;
use crate::domain::entities::search_config::SearchConfig;
use crate::domain::ports::marketplace::{AdapterError, Marketplace};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const SOURCE: &str = "facebook";

/// Facebook Marketplace adapter. Disabled unless the run configuration
/// opts in, since anonymous results are best-effort: listings are pulled
/// out of the JSON blobs embedded in the search page, and an unparseable
/// page degrades to zero listings rather than failing the run.
pub struct FacebookMarketplace {
    client: reqwest::Client,
}

impl FacebookMarketplace {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(
                    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .build()
                .unwrap_or_default(),
        }
    }

    /// Scan embedded JSON for marketplace listing objects.
    ///
    /// The search page inlines listing data as
    /// `"marketplace_listing_title":"..."` with an `"id"` nearby and a
    /// price under `"formatted_amount":"$..."`. This extractor walks each
    /// title occurrence and picks the id and price out of the surrounding
    /// window. Tolerant by design: anything it cannot place is skipped.
    fn extract_listings(html: &str) -> Vec<RawListing> {
        let mut listings = Vec::new();
        let mut cursor = 0;

        while let Some(at) = html[cursor..].find("\"marketplace_listing_title\":") {
            let title_key = cursor + at;
            cursor = title_key + 1;

            let Some(title) = json_string_after(html, title_key) else {
                continue;
            };

            // The listing id appears shortly before the title key.
            let window_start = title_key.saturating_sub(400);
            let id = html[window_start..title_key]
                .rfind("\"id\":")
                .and_then(|rel| json_string_after(html, window_start + rel));

            // Price follows within the same listing object.
            let window_end = (title_key + 600).min(html.len());
            let price = html[title_key..window_end]
                .find("\"formatted_amount\":")
                .and_then(|rel| json_string_after(html, title_key + rel))
                .and_then(|amount| parse_amount(&amount));

            let location = html[title_key..window_end]
                .find("\"city\":")
                .and_then(|rel| json_string_after(html, title_key + rel))
                .unwrap_or_default();

            let Some(id) = id else { continue };

            listings.push(RawListing {
                source: SOURCE.to_string(),
                title,
                price,
                location,
                url: format!("https://www.facebook.com/marketplace/item/{id}"),
                body: None,
            });
        }

        listings
    }
}

impl Default for FacebookMarketplace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Marketplace for FacebookMarketplace {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn enabled(&self, config: &SearchConfig) -> bool {
        config.include_facebook
    }

    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError> {
        let url = format!(
            "https://www.facebook.com/marketplace/search/?query={}",
            query.replace(' ', "%20")
        );
        debug!(url, radius = config.radius_miles, "fetching facebook marketplace search");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AdapterError::Network(format!(
                "facebook returned {}",
                resp.status()
            )));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        let listings = Self::extract_listings(&html);
        if listings.is_empty() {
            warn!(query, "no marketplace listings found in page (login wall likely)");
        }
        Ok(listings)
    }
}

/// Read the JSON string value that follows the key starting at `key_start`.
fn json_string_after(html: &str, key_start: usize) -> Option<String> {
    let colon = html[key_start..].find(':')? + key_start;
    let open = html[colon..].find('"')? + colon + 1;
    let mut end = open;
    let bytes = html.as_bytes();
    while end < bytes.len() {
        match bytes[end] {
            b'\\' => end += 2,
            b'"' => {
                let raw = &html[open..end];
                return Some(raw.replace("\\\"", "\"").replace("\\/", "/"));
            }
            _ => end += 1,
        }
    }
    None
}

fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"node":{"id":"1234567890","marketplace_listing_title":"PS5 console good condition","listing_price":{"formatted_amount":"$250"},"location":{"reverse_geocode":{"city":"Redding","state":"CA"}}}},{"node":{"id":"987654321","marketplace_listing_title":"Xbox Series X","listing_price":{"formatted_amount":"$300"},"location":{"reverse_geocode":{"city":"Anderson","state":"CA"}}}}"#;

    #[test]
    fn test_extract_listings_from_embedded_json() {
        let listings = FacebookMarketplace::extract_listings(SAMPLE);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "PS5 console good condition");
        assert_eq!(listings[0].price, Some(250.0));
        assert_eq!(listings[0].location, "Redding");
        assert_eq!(
            listings[0].url,
            "https://www.facebook.com/marketplace/item/1234567890"
        );
        assert_eq!(listings[1].title, "Xbox Series X");
        assert_eq!(listings[1].source, "facebook");
    }

    #[test]
    fn test_extract_listings_tolerates_garbage() {
        assert!(FacebookMarketplace::extract_listings("<html>login required</html>").is_empty());
    }

    #[test]
    fn test_disabled_unless_opted_in() {
        let market = FacebookMarketplace::new();
        let mut config = SearchConfig::default();
        assert!(!market.enabled(&config));
        config.include_facebook = true;
        assert!(market.enabled(&config));
    }

    #[test]
    fn test_json_string_after_handles_escapes() {
        let s = r#""title":"18\" wheels""#;
        assert_eq!(json_string_after(s, 0), Some("18\" wheels".to_string()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,250"), Some(1250.0));
        assert_eq!(parse_amount("Free"), None);
    }
}
