pub mod condition;
pub mod demand;
pub mod market_price;
pub mod seller;
pub mod travel;
pub mod valuation;

/// Round to cents. Exported amounts must be stable across runs, so every
/// monetary field is rounded at the point it is derived.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
