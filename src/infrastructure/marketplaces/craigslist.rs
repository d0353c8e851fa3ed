use crate::domain::entities::listing::RawListing;
use crate::domain::entities::search_config::SearchConfig;
use crate::domain::ports::marketplace::{AdapterError, Marketplace};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

const SOURCE: &str = "craigslist";

/// Craigslist search adapter. Scrapes the static search results page for
/// the configured region subdomain.
pub struct CraigslistMarketplace {
    client: reqwest::Client,
}

impl CraigslistMarketplace {
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

    fn search_url(&self, query: &str, config: &SearchConfig) -> String {
        let mut url = format!(
            "https://{}.craigslist.org/search/sss?query={}&postal={}&search_distance={}",
            config.site,
            urlencode(query),
            urlencode(&config.postal),
            config.radius_miles as u64,
        );
        if let Some(max_price) = config.max_price {
            url.push_str(&format!("&max_price={}", max_price as u64));
        }
        url
    }

    /// Parse the static search results markup into listings.
    fn parse_results(html: &str) -> Vec<RawListing> {
        // Selectors are static and known-valid.
        let result_sel = Selector::parse("li.cl-static-search-result").unwrap();
        let link_sel = Selector::parse("a").unwrap();
        let title_sel = Selector::parse("div.title").unwrap();
        let price_sel = Selector::parse("div.price").unwrap();
        let location_sel = Selector::parse("div.location").unwrap();

        let document = Html::parse_document(html);
        let mut listings = Vec::new();

        for result in document.select(&result_sel) {
            let Some(link) = result.select(&link_sel).next() else {
                continue;
            };
            let Some(url) = link.value().attr("href") else {
                continue;
            };

            let title = result
                .select(&title_sel)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
                .unwrap_or_default();
            if title.is_empty() {
                continue;
            }

            let price = result
                .select(&price_sel)
                .next()
                .map(|p| p.text().collect::<String>())
                .and_then(|p| parse_price(&p));

            let location = result
                .select(&location_sel)
                .next()
                .map(|l| l.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            listings.push(RawListing {
                source: SOURCE.to_string(),
                title,
                price,
                location,
                url: url.to_string(),
                body: None,
            });
        }

        listings
    }
}

impl Default for CraigslistMarketplace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Marketplace for CraigslistMarketplace {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RawListing>, AdapterError> {
        let url = self.search_url(query, config);
        debug!(url, "fetching craigslist search page");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AdapterError::Network(format!(
                "craigslist returned {} for {url}",
                resp.status()
            )));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        let listings = Self::parse_results(&html);
        if listings.is_empty() {
            warn!(query, site = %config.site, "craigslist search returned no parseable listings");
        }
        Ok(listings)
    }
}

/// Parse "$1,234" / "$250" style price text.
fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            ' ' => out.push('+'),
            other => {
                let mut buf = [0u8; 4];
                for byte in other.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    out
}
