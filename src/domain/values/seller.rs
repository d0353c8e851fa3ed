//! Seller trust scoring from listing text.
//!
//! Two keyword tables: red phrases (scam and urgency language) subtract
//! from a neutral baseline, green phrases (provenance and care signals)
//! add to it. The result is clamped to 0.0–1.0. No external state.

use serde::Serialize;

const BASELINE_RATING: f64 = 0.5;

/// Phrases that lower trust, with their penalty.
const RED_FLAGS: &[(&str, f64)] = &[
    ("gift card", 0.3),
    ("wire transfer", 0.3),
    ("western union", 0.3),
    ("shipping only", 0.2),
    ("must sell today", 0.2),
    ("deposit required", 0.2),
    ("cash app only", 0.15),
    ("urgent", 0.15),
    ("no lowballers", 0.05),
    ("no returns", 0.1),
    ("no refunds", 0.1),
];

/// Phrases that raise trust, with their bonus.
const GREEN_FLAGS: &[(&str, f64)] = &[
    ("original receipt", 0.15),
    ("receipt", 0.1),
    ("warranty", 0.15),
    ("original box", 0.1),
    ("original packaging", 0.1),
    ("smoke free", 0.1),
    ("pet free", 0.05),
    ("adult owned", 0.05),
    ("tested", 0.1),
    ("works perfectly", 0.1),
    ("local pickup", 0.05),
];

/// Trust rating with the phrases that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SellerAssessment {
    /// 0.0 (avoid) to 1.0 (trustworthy), 0.5 baseline.
    pub rating: f64,
    pub red_flags: Vec<&'static str>,
    pub green_flags: Vec<&'static str>,
}

/// Score seller trustworthiness from listing text.
pub fn rate_seller(text: &str) -> SellerAssessment {
    let haystack = text.to_lowercase();

    let mut rating = BASELINE_RATING;
    let mut red_flags = Vec::new();
    let mut green_flags = Vec::new();

    for (phrase, penalty) in RED_FLAGS {
        if haystack.contains(phrase) {
            rating -= penalty;
            red_flags.push(*phrase);
        }
    }
    for (phrase, bonus) in GREEN_FLAGS {
        if haystack.contains(phrase) {
            rating += bonus;
            green_flags.push(*phrase);
        }
    }

    SellerAssessment {
        rating: rating.clamp(0.0, 1.0),
        red_flags,
        green_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_baseline() {
        let s = rate_seller("PS5 console, comes with two controllers");
        assert!((s.rating - BASELINE_RATING).abs() < f64::EPSILON);
        assert!(s.red_flags.is_empty());
        assert!(s.green_flags.is_empty());
    }

    #[test]
    fn test_red_flags_subtract() {
        let s = rate_seller("MUST SELL TODAY, gift card payment ok");
        assert!(s.rating < BASELINE_RATING);
        assert!(s.red_flags.contains(&"must sell today"));
        assert!(s.red_flags.contains(&"gift card"));
    }

    #[test]
    fn test_green_flags_add() {
        let s = rate_seller("Adult owned, smoke free home, original box and receipt");
        assert!(s.rating > BASELINE_RATING);
        assert!(s.green_flags.contains(&"original box"));
        assert!(s.green_flags.contains(&"smoke free"));
    }

    #[test]
    fn test_rating_clamped_low() {
        let s = rate_seller(
            "urgent must sell today, wire transfer or western union or gift card, \
             shipping only, no returns no refunds",
        );
        assert!(s.rating >= 0.0);
        assert_eq!(s.rating, 0.0);
    }

    #[test]
    fn test_rating_clamped_high() {
        let s = rate_seller(
            "tested, works perfectly, warranty, original receipt, original box, \
             original packaging, smoke free, pet free, adult owned, local pickup",
        );
        assert!(s.rating <= 1.0);
        assert_eq!(s.rating, 1.0);
    }

    #[test]
    fn test_deterministic() {
        let a = rate_seller("no returns, tested and works perfectly");
        let b = rate_seller("no returns, tested and works perfectly");
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.red_flags, b.red_flags);
        assert_eq!(a.green_flags, b.green_flags);
    }
}
