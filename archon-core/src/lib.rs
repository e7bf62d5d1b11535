//! # archon-core
//!
//! Foundation crate for the Archon compliance scoring engine.
//! Defines all shared types, errors, config, constants, and the closed
//! layer taxonomy. The other crates in the workspace depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod layers;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{ArchonConfig, GateConfig, MatrixConfig};
pub use errors::{ArchonError, ArchonResult, MatrixError, ScoringError};
pub use layers::Layer;
pub use models::{
    CacheStatus, EncryptedMatrixPackage, Gap, GateOutcome, LayerRequirement, MatrixHealth,
    ScoreDetail, ScoreSummary, Tier,
};
