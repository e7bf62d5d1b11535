use serde::{Deserialize, Serialize};

use super::ScoreSummary;

/// Terminal result of a compliance gate run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateOutcome {
    /// True when some attempt landed in the acceptance window.
    pub success: bool,
    /// The attempt that succeeded, or the total attempts on exhaustion.
    pub attempts: u32,
    /// The accepted score, or the final score on exhaustion.
    pub score: ScoreSummary,
    pub message: String,
    /// Score history across every attempt (length == `attempts` on exhaustion).
    pub all_results: Vec<ScoreSummary>,
}
