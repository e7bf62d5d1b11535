//! Error types for the Archon engine.
//!
//! Each subsystem gets its own thiserror enum; [`ArchonError`] unifies them
//! at crate boundaries so callers can use one result type.

mod matrix_error;
mod scoring_error;

pub use matrix_error::MatrixError;
pub use scoring_error::ScoringError;

/// Unified error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum ArchonError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Result alias used across the workspace.
pub type ArchonResult<T> = Result<T, ArchonError>;
