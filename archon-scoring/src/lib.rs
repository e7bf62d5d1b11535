//! # archon-scoring
//!
//! Scoring side of the Archon engine: keyword-based layer scoring, the
//! bounded-retry compliance gate, and the [`engine::ScoringEngine`] that
//! implements the public request/response contract.

pub mod engine;
pub mod gate;
pub mod scorer;

pub use engine::ScoringEngine;
pub use gate::{ComplianceGate, GateState};
pub use scorer::Scorer;
