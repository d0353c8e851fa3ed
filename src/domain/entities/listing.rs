use serde::{Deserialize, Serialize};

/// A raw marketplace listing as produced by an adapter. Immutable once
/// ingested; everything derived from it lives on the deal records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    /// Source tag, e.g. "craigslist" or "facebook". Adapters set this
    /// before the listing enters the pipeline.
    pub source: String,
    pub title: String,
    /// Asking price in dollars. `None` when the listing shows no price;
    /// such listings never become deal candidates.
    pub price: Option<f64>,
    pub location: String,
    pub url: String,
    /// Free-text body, when the adapter captured one.
    pub body: Option<String>,
}

impl RawListing {
    /// Text used by the condition and seller scorers: title plus body
    /// when a body is present.
    pub fn scored_text(&self) -> String {
        match &self.body {
            Some(body) if !body.is_empty() => format!("{} {}", self.title, body),
            _ => self.title.clone(),
        }
    }
}
