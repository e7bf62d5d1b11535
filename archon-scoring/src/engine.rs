//! ScoringEngine — the engine's public contract: validate input, load the
//! matrix, extract requirements, score, gate, and assemble the response
//! envelope. The HTTP router and CLI live outside this workspace and relay
//! these types verbatim.

use archon_core::config::ArchonConfig;
use archon_core::errors::{ArchonResult, MatrixError, ScoringError};
use archon_core::models::{
    HealthStatus, InputSummary, MatrixHealth, MatrixSummary, ScoreRequest, ScoreResponse,
    ScoreSummary, ThresholdWindow,
};
use archon_matrix::prompt::ConstraintBundle;
use archon_matrix::MatrixClient;
use chrono::Utc;
use tracing::info;

use crate::gate::ComplianceGate;
use crate::scorer::Scorer;

/// One engine instance: matrix client + scorer + gate.
///
/// Cache state is per-instance; two engines never share a slot.
#[derive(Debug)]
pub struct ScoringEngine {
    client: MatrixClient,
    scorer: Scorer,
    gate: ComplianceGate,
}

impl ScoringEngine {
    pub fn new(config: &ArchonConfig) -> Result<Self, MatrixError> {
        let window = ThresholdWindow {
            min: config.gate.threshold_min,
            max: config.gate.threshold_max,
        };
        Ok(Self {
            client: MatrixClient::new(&config.matrix)?,
            scorer: Scorer::new(window),
            gate: ComplianceGate::new(config.gate.max_attempts),
        })
    }

    /// Score a request, rescoring the same text on non-compliant attempts.
    pub async fn score(&self, request: &ScoreRequest) -> ArchonResult<ScoreResponse> {
        self.score_with_regenerator(request, |_, _| None).await
    }

    /// Score a request with an injected regeneration capability consulted
    /// between non-compliant gate attempts.
    pub async fn score_with_regenerator<F>(
        &self,
        request: &ScoreRequest,
        next_candidate: F,
    ) -> ArchonResult<ScoreResponse>
    where
        F: FnMut(u32, &ScoreSummary) -> Option<String>,
    {
        let architecture = request.architecture.trim();
        if architecture.is_empty() {
            return Err(ScoringError::InvalidInput {
                reason: "architecture text is required".to_string(),
            }
            .into());
        }

        info!(length = architecture.len(), "scoring architecture text");

        let matrix = self.client.load().await?;
        let weights = archon_matrix::extract::layer_weights(&matrix);
        let requirements = archon_matrix::extract::layer_requirements(&weights);

        let gate = self
            .gate
            .run(&self.scorer, &requirements, architecture, next_candidate);

        Ok(ScoreResponse {
            status: "success".to_string(),
            timestamp: Utc::now(),
            input: InputSummary::of(architecture),
            scoring: gate.score.clone(),
            gate,
            matrix: MatrixSummary {
                // The matrix loaded and decrypted for this request.
                health: HealthStatus::Healthy,
                layer_count: archon_matrix::extract::taxonomy_layer_count(&matrix),
                total_weight: weights.values().map(|&w| w as u64).sum(),
            },
        })
    }

    /// Constraint guidance for an external generator, using the gate's window.
    pub async fn constraints(&self) -> Result<ConstraintBundle, MatrixError> {
        let window = self.scorer.window();
        self.client.build_constraints(window.min, window.max).await
    }

    /// Matrix subsystem health. Never fails.
    pub async fn health(&self) -> MatrixHealth {
        self.client.health().await
    }

    /// The underlying matrix client (cache control for embedders).
    pub fn client(&self) -> &MatrixClient {
        &self.client
    }
}
