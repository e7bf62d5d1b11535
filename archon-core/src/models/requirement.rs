use serde::{Deserialize, Serialize};

/// Per-layer scoring requirement, derived from the matrix weights and the
/// compiled-in taxonomy. Recomputed on every extraction; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerRequirement {
    /// Normalized weight (percentage points).
    pub weight: u32,
    /// A layer is required when it carries any weight.
    pub required: bool,
    pub description: String,
    /// Keywords counted during scoring.
    pub keywords: Vec<String>,
    /// Minimum mention count for full mention credit: `ceil(weight / 10)`.
    pub min_mentions: u32,
}

impl LayerRequirement {
    /// Build a requirement from a normalized weight and taxonomy data.
    pub fn new(weight: u32, description: String, keywords: Vec<String>) -> Self {
        Self {
            weight,
            required: weight > 0,
            description,
            keywords,
            min_mentions: weight.div_ceil(10),
        }
    }
}
