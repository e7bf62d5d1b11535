/// Scoring-side errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// The caller supplied empty or non-text architecture input.
    /// Rejected before any scoring work.
    #[error("invalid architecture input: {reason}")]
    InvalidInput { reason: String },
}
