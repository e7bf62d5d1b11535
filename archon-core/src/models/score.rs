use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical label derived from the aggregate percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Fail,
    Basic,
    Good,
    Optimal,
    OverEngineered,
}

/// The acceptance window applied by the compliance gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdWindow {
    pub min: f64,
    pub max: f64,
}

impl Tier {
    /// Classify a percentage against the acceptance window.
    ///
    /// Both window bounds are inclusive; only [`Tier::Optimal`] is compliant.
    pub fn classify(percentage: f64, window: ThresholdWindow) -> Tier {
        if percentage >= window.min && percentage <= window.max {
            Tier::Optimal
        } else if percentage > window.max {
            Tier::OverEngineered
        } else if percentage >= 70.0 {
            Tier::Good
        } else if percentage >= 50.0 {
            Tier::Basic
        } else {
            Tier::Fail
        }
    }
}

/// Per-layer scoring breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub weight: u32,
    /// Word-boundary keyword occurrences found in the text.
    pub mentions: u32,
    /// The layer's `min_mentions` threshold.
    pub expected_mentions: u32,
    /// Distinct keywords present (substring-level).
    pub unique_keywords: usize,
    pub total_keywords: usize,
    /// Weighted layer score, in [0, weight].
    pub score: f64,
    /// `score / weight` as a percentage.
    pub percentage: f64,
}

/// A layer whose score fell below half its weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    /// Display name of the layer.
    pub layer: String,
    /// "Not addressed" when zero mentions, else "Insufficient detail".
    pub issue: String,
    /// The layer's full weight.
    pub expected: u32,
    /// The score actually achieved.
    pub actual: f64,
}

/// Aggregate scoring result for one architecture text.
///
/// Pure function of text + taxonomy: rescoring an unchanged text yields an
/// identical summary (modulo `timestamp`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Weight-normalized aggregate score, rounded to two decimals for
    /// display. `tier` is classified from the exact value.
    pub percentage: f64,
    pub tier: Tier,
    /// True only in the [min, max] window (tier OPTIMAL).
    pub compliant: bool,
    pub total_score: f64,
    pub max_possible_score: u64,
    /// Breakdown keyed by matrix layer identifier.
    pub details: BTreeMap<String, ScoreDetail>,
    pub gaps: Vec<Gap>,
    pub threshold: ThresholdWindow,
    pub timestamp: DateTime<Utc>,
}
