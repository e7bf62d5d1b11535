//! Keyword-based layer scoring.
//!
//! Mention counting is word-boundary matching so "api" does not count inside
//! "rapid"; the diversity bonus is substring-level on purpose, rewarding
//! breadth of vocabulary even from partial matches.

use std::collections::BTreeMap;

use archon_core::constants::{DIVERSITY_BLEND, MENTION_BLEND};
use archon_core::layers::display_name;
use archon_core::models::{Gap, LayerRequirement, ScoreDetail, ScoreSummary, ThresholdWindow, Tier};
use chrono::Utc;
use regex::Regex;
use tracing::warn;

/// Scores architecture texts against extracted layer requirements.
///
/// Pure: the same text against the same requirements always yields the same
/// summary (modulo timestamp).
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    window: ThresholdWindow,
}

impl Scorer {
    pub fn new(window: ThresholdWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> ThresholdWindow {
        self.window
    }

    /// Score one text. Zero-weight layers are skipped entirely.
    pub fn score(
        &self,
        text: &str,
        requirements: &BTreeMap<String, LayerRequirement>,
    ) -> ScoreSummary {
        let lowered = text.to_lowercase();

        let mut total_score = 0.0_f64;
        let mut max_possible_score = 0_u64;
        let mut details = BTreeMap::new();
        let mut gaps = Vec::new();

        for (id, req) in requirements {
            if req.weight == 0 {
                continue;
            }
            max_possible_score += req.weight as u64;

            let mut mentions = 0_u32;
            let mut unique_keywords = 0_usize;
            for keyword in &req.keywords {
                let keyword = keyword.to_lowercase();
                mentions += word_boundary_count(&lowered, &keyword);
                if lowered.contains(&keyword) {
                    unique_keywords += 1;
                }
            }

            // Capped at 1: mentions beyond the threshold earn no extra credit.
            let mention_score =
                (f64::from(mentions) / f64::from(req.min_mentions.max(1))).min(1.0);
            let diversity_bonus = if req.keywords.is_empty() {
                0.0
            } else {
                unique_keywords as f64 / req.keywords.len() as f64
            };
            let layer_score =
                (MENTION_BLEND * mention_score + DIVERSITY_BLEND * diversity_bonus)
                    * f64::from(req.weight);
            total_score += layer_score;

            if layer_score < f64::from(req.weight) * 0.5 {
                gaps.push(Gap {
                    layer: display_name(id),
                    issue: if mentions == 0 {
                        "Not addressed".to_string()
                    } else {
                        "Insufficient detail".to_string()
                    },
                    expected: req.weight,
                    actual: layer_score,
                });
            }

            details.insert(
                id.clone(),
                ScoreDetail {
                    weight: req.weight,
                    mentions,
                    expected_mentions: req.min_mentions,
                    unique_keywords,
                    total_keywords: req.keywords.len(),
                    score: layer_score,
                    percentage: layer_score / f64::from(req.weight) * 100.0,
                },
            );
        }

        let raw_percentage = if max_possible_score > 0 {
            total_score / max_possible_score as f64 * 100.0
        } else {
            0.0
        };
        // Classification uses the exact value; rounding is for display only,
        // so a score just below a boundary never rounds its way across it.
        let tier = Tier::classify(raw_percentage, self.window);

        ScoreSummary {
            percentage: round2(raw_percentage),
            tier,
            compliant: tier == Tier::Optimal,
            total_score,
            max_possible_score,
            details,
            gaps,
            threshold: self.window,
            timestamp: Utc::now(),
        }
    }
}

/// Count case-insensitive whole-word occurrences of `keyword` in `text`.
/// Both inputs are expected pre-lowercased.
fn word_boundary_count(text: &str, keyword: &str) -> u32 {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count() as u32,
        Err(e) => {
            // Unreachable with escaped keywords; a keyword that somehow fails
            // to compile contributes no mentions.
            warn!(keyword, error = %e, "keyword pattern failed to compile");
            0
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
