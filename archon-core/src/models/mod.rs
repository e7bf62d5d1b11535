//! Shared models for matrix acquisition, scoring, and the engine contract.

mod gate;
mod matrix;
mod requirement;
mod response;
mod score;

pub use gate::GateOutcome;
pub use matrix::{CacheStatus, EncryptedMatrixPackage, HealthStatus, MatrixHealth, MatrixSummary};
pub use requirement::LayerRequirement;
pub use response::{InputSummary, ScoreRequest, ScoreResponse};
pub use score::{Gap, ScoreDetail, ScoreSummary, ThresholdWindow, Tier};
