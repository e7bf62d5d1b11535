//! Bounded-retry compliance gate.
//!
//! The gate never regenerates text itself: between attempts it asks an
//! injected candidate provider for a replacement, and rescoring an unchanged
//! text is a deterministic no-op. Scoring errors are not retried — only a
//! "not compliant" outcome moves the machine forward.

use std::collections::BTreeMap;

use archon_core::models::{GateOutcome, LayerRequirement, ScoreSummary};
use tracing::{debug, info};

use crate::scorer::Scorer;

/// Gate state machine: `Attempting(n) → Accepted | Attempting(n+1) | Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Evaluating attempt `n` (1-based).
    Attempting(u32),
    /// Some attempt landed in the acceptance window.
    Accepted,
    /// All attempts spent without compliance.
    Exhausted,
}

/// Applies the acceptance window across a bounded number of attempts.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceGate {
    max_attempts: u32,
}

impl ComplianceGate {
    /// `max_attempts` is clamped to at least one; a gate that never scores
    /// has no outcome to report.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run the gate over `text`, consulting `next_candidate` between
    /// non-compliant attempts. A `None` from the provider rescans the current
    /// text verbatim (the designed extension point for external regeneration).
    pub fn run<F>(
        &self,
        scorer: &Scorer,
        requirements: &BTreeMap<String, LayerRequirement>,
        text: &str,
        mut next_candidate: F,
    ) -> GateOutcome
    where
        F: FnMut(u32, &ScoreSummary) -> Option<String>,
    {
        let mut current = text.to_string();
        let mut all_results: Vec<ScoreSummary> = Vec::new();
        let mut attempt = 1_u32;

        // Each iteration is one Attempting(n) state; the loop breaks with the
        // terminal state and the score that decided it.
        let (terminal, score) = loop {
            debug!(attempt, max = self.max_attempts, "gate evaluation attempt");

            let score = scorer.score(&current, requirements);
            all_results.push(score.clone());

            if score.compliant {
                break (GateState::Accepted, score);
            }
            if attempt >= self.max_attempts {
                break (GateState::Exhausted, score);
            }

            debug!(
                percentage = score.percentage,
                tier = ?score.tier,
                "not compliant, requesting next candidate"
            );
            if let Some(replacement) = next_candidate(attempt, &score) {
                current = replacement;
            }
            attempt += 1;
        };

        match terminal {
            GateState::Accepted => {
                info!(attempt, percentage = score.percentage, "gate accepted");
                let message = format!(
                    "Architecture meets compliance requirements ({}%)",
                    score.percentage
                );
                GateOutcome {
                    success: true,
                    attempts: attempt,
                    score,
                    message,
                    all_results,
                }
            }
            GateState::Exhausted | GateState::Attempting(_) => {
                info!(
                    attempts = self.max_attempts,
                    percentage = score.percentage,
                    "gate exhausted"
                );
                let message = format!(
                    "Architecture failed to meet compliance after {} attempts. Final score: {}%",
                    self.max_attempts, score.percentage
                );
                GateOutcome {
                    success: false,
                    attempts: self.max_attempts,
                    score,
                    message,
                    all_results,
                }
            }
        }
    }

    /// Rescore the same text across all attempts (no external regeneration).
    pub fn evaluate(
        &self,
        scorer: &Scorer,
        requirements: &BTreeMap<String, LayerRequirement>,
        text: &str,
    ) -> GateOutcome {
        self.run(scorer, requirements, text, |_, _| None)
    }
}
