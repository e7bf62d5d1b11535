use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GateOutcome, MatrixSummary, ScoreSummary};

/// A scoring request: one architecture description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub architecture: String,
}

/// Echo of the accepted input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSummary {
    pub architecture_length: usize,
    /// First 100 characters, elided with `...` when truncated.
    pub preview: String,
}

/// Successful engine response: scoring breakdown, gate outcome, matrix facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub input: InputSummary,
    pub scoring: ScoreSummary,
    pub gate: GateOutcome,
    pub matrix: MatrixSummary,
}

impl InputSummary {
    /// Summarize an architecture text for response echoing.
    pub fn of(text: &str) -> Self {
        let preview: String = if text.chars().count() > 100 {
            let head: String = text.chars().take(100).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };
        Self {
            architecture_length: text.len(),
            preview,
        }
    }
}
