use serde::{Deserialize, Serialize};

/// External market price estimate for a listing title.
///
/// A sample size of zero means "no data" and is treated identically to a
/// fully absent estimate everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketPriceEstimate {
    /// Average sold price across the sampled listings. Zero when unknown.
    pub average_sold_price: f64,
    /// How many sold listings the average is based on.
    pub sample_size: u32,
}

impl MarketPriceEstimate {
    pub fn new(average_sold_price: f64, sample_size: u32) -> Self {
        Self {
            average_sold_price,
            sample_size,
        }
    }

    /// The "no data" estimate used when no price source is configured or a
    /// lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_data(&self) -> bool {
        self.sample_size > 0 && self.average_sold_price > 0.0
    }
}
