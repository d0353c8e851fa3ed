//! Demand scoring — the composite ranking signal.
//!
//! Blends three signals into one 0.0–1.0 score:
//! - keyword relevance between the listing title and the search hint,
//! - the condition score,
//! - rule profit, passed through a saturating transform so one outsized
//!   profit estimate cannot dominate the ranking.
//!
//! The weights and the saturation constant are the tunable part; the
//! contract is that the score is monotonic in profit and in condition
//! when everything else is held fixed.

use crate::domain::values::round2;

const RELEVANCE_WEIGHT: f64 = 0.35;
const CONDITION_WEIGHT: f64 = 0.25;
const PROFIT_WEIGHT: f64 = 0.40;

/// Rule profit (in dollars) at which the profit term reaches half of its
/// full weight. Diminishing returns above this.
const PROFIT_HALF_SATURATION: f64 = 100.0;

/// Fraction of hint tokens that appear in the title. Neutral 0.5 when the
/// hint carries no usable tokens.
fn keyword_relevance(title: &str, category_hint: &str) -> f64 {
    let title_lower = title.to_lowercase();
    let tokens: Vec<&str> = category_hint
        .split_whitespace()
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return 0.5;
    }

    let hits = tokens
        .iter()
        .filter(|t| title_lower.contains(&t.to_lowercase()))
        .count();
    hits as f64 / tokens.len() as f64
}

/// Bounded, monotonically increasing transform of rule profit.
/// Negative profit contributes nothing.
fn profit_term(rule_profit: f64) -> f64 {
    let profit = rule_profit.max(0.0);
    profit / (profit + PROFIT_HALF_SATURATION)
}

/// Composite demand score in 0.0–1.0.
pub fn demand_score(title: &str, category_hint: &str, condition_score: f64, rule_profit: f64) -> f64 {
    let relevance = keyword_relevance(title, category_hint);
    let condition = condition_score.clamp(0.0, 1.0);
    let profit = profit_term(rule_profit);

    round2(RELEVANCE_WEIGHT * relevance + CONDITION_WEIGHT * condition + PROFIT_WEIGHT * profit)
}
