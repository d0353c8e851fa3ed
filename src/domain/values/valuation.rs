//! Rule-based market valuation.
//!
//! Estimates what a listing would resell for from nothing but the local
//! asking price and the condition score — no external price source. The
//! working assumption is that local sellers underprice relative to the
//! broader market, and that better condition widens the gap.

use crate::domain::values::round2;
use serde::Serialize;

/// Resale multiplier bands keyed by minimum condition score, best
/// condition first. First band whose floor the score meets applies.
const VALUE_MULTIPLIERS: &[(f64, f64)] = &[
    (0.9, 1.45),  // new in box resells well above local ask
    (0.75, 1.35), // like new
    (0.55, 1.2),  // good
    (0.35, 1.0),  // fair: roughly break-even
    (0.0, 0.7),   // parts/broken: resells below ask
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleValuation {
    /// Estimated resale value in dollars.
    pub market_value: f64,
    /// `market_value - local_price`; may be negative.
    pub rule_profit: f64,
}

fn condition_multiplier(condition_score: f64) -> f64 {
    let score = condition_score.clamp(0.0, 1.0);
    for (floor, multiplier) in VALUE_MULTIPLIERS {
        if score >= *floor {
            return *multiplier;
        }
    }
    // Unreachable: the last band floor is 0.0.
    1.0
}

/// Estimate market value and profit from local price and condition score.
///
/// A zero asking price yields a profit equal to the estimated value.
/// Never divides, so no input can produce NaN or infinity.
pub fn estimate_market_value_and_profit(local_price: f64, condition_score: f64) -> RuleValuation {
    let price = local_price.max(0.0);
    let market_value = round2(price * condition_multiplier(condition_score));
    RuleValuation {
        market_value,
        rule_profit: round2(market_value - price),
    }
}
