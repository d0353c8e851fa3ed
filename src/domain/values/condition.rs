//! Condition extraction from listing text.
//!
//! Keyword-table driven: each indicator phrase maps to a label and a
//! confidence score. When several phrases match, the highest-confidence
//! label wins. Matching is case-insensitive and purely textual, so
//! identical input always yields the identical assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLabel {
    New,
    LikeNew,
    Good,
    Fair,
    ForParts,
    Unknown,
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionLabel::New => write!(f, "New"),
            ConditionLabel::LikeNew => write!(f, "Like New"),
            ConditionLabel::Good => write!(f, "Good"),
            ConditionLabel::Fair => write!(f, "Fair"),
            ConditionLabel::ForParts => write!(f, "For Parts"),
            ConditionLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Score assigned when no indicator phrase matches.
pub const NEUTRAL_CONDITION_SCORE: f64 = 0.5;

/// Indicator phrases ordered by confidence, highest first. The first
/// matching entry decides the label; later matches are still reported
/// so callers can explain the assessment.
const CONDITION_RULES: &[(&str, ConditionLabel, f64)] = &[
    ("brand new", ConditionLabel::New, 1.0),
    ("new in box", ConditionLabel::New, 1.0),
    ("factory sealed", ConditionLabel::New, 1.0),
    ("sealed", ConditionLabel::New, 0.95),
    ("never used", ConditionLabel::New, 0.95),
    ("never opened", ConditionLabel::New, 0.95),
    ("like new", ConditionLabel::LikeNew, 0.85),
    ("open box", ConditionLabel::LikeNew, 0.85),
    ("barely used", ConditionLabel::LikeNew, 0.8),
    ("mint", ConditionLabel::LikeNew, 0.8),
    ("excellent condition", ConditionLabel::LikeNew, 0.8),
    ("excellent", ConditionLabel::LikeNew, 0.75),
    ("great condition", ConditionLabel::Good, 0.7),
    ("works great", ConditionLabel::Good, 0.65),
    ("good condition", ConditionLabel::Good, 0.65),
    ("lightly used", ConditionLabel::Good, 0.6),
    ("gently used", ConditionLabel::Good, 0.6),
    ("used", ConditionLabel::Good, 0.55),
    ("fair condition", ConditionLabel::Fair, 0.4),
    ("some wear", ConditionLabel::Fair, 0.35),
    ("scratches", ConditionLabel::Fair, 0.35),
    ("scuffed", ConditionLabel::Fair, 0.35),
    ("as-is", ConditionLabel::Fair, 0.3),
    ("as is", ConditionLabel::Fair, 0.3),
    ("cracked", ConditionLabel::ForParts, 0.15),
    ("doesn't work", ConditionLabel::ForParts, 0.1),
    ("not working", ConditionLabel::ForParts, 0.1),
    ("for parts", ConditionLabel::ForParts, 0.1),
    ("parts only", ConditionLabel::ForParts, 0.1),
    ("broken", ConditionLabel::ForParts, 0.1),
];

/// Condition derived from free text, with the trigger phrases that matched.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionAssessment {
    pub label: ConditionLabel,
    /// 0.0 (parts) to 1.0 (new). 0.5 when nothing matched.
    pub score: f64,
    pub matched: Vec<&'static str>,
}

impl ConditionAssessment {
    fn unknown() -> Self {
        Self {
            label: ConditionLabel::Unknown,
            score: NEUTRAL_CONDITION_SCORE,
            matched: Vec::new(),
        }
    }
}

/// Derive a condition label and score from listing text.
pub fn parse_condition(text: &str) -> ConditionAssessment {
    let haystack = text.to_lowercase();

    let mut matched = Vec::new();
    let mut best: Option<(ConditionLabel, f64)> = None;

    for (phrase, label, score) in CONDITION_RULES {
        if haystack.contains(phrase) {
            matched.push(*phrase);
            // Rules are ordered highest-confidence first, so the first
            // match is the winner.
            if best.is_none() {
                best = Some((*label, *score));
            }
        }
    }

    match best {
        Some((label, score)) => ConditionAssessment {
            label,
            score,
            matched,
        },
        None => ConditionAssessment::unknown(),
    }
}
