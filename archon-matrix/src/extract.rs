//! Weight and requirement extraction from a decrypted matrix.
//!
//! The matrix supplies weights only (`EVAL_CRITERIA.weights_pct`); keyword
//! sets and descriptions come from the compiled-in [`Layer`] taxonomy.

use std::collections::BTreeMap;

use archon_core::layers::{self, Layer};
use archon_core::models::LayerRequirement;
use serde_json::Value;
use tracing::warn;

/// Normalize one weight value to a non-negative integer.
///
/// Strings are stripped to their digits ("15_PERCENT" → 15, "10%" → 10);
/// a string with no digits normalizes to zero. Numbers pass through; anything
/// negative or non-integral clamps to zero. Never fails.
pub fn normalize_weight(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n.as_u64().map(|w| w.min(u32::MAX as u64) as u32).unwrap_or(0),
        Value::String(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Extract per-layer weights from `EVAL_CRITERIA.weights_pct`.
///
/// A missing or non-object section yields an empty map rather than an error:
/// the matrix structurally parsed, it just defines no weighted layers.
pub fn layer_weights(matrix: &Value) -> BTreeMap<String, u32> {
    let section = matrix
        .pointer("/EVAL_CRITERIA/weights_pct")
        .and_then(Value::as_object);

    let Some(entries) = section else {
        warn!("matrix has no EVAL_CRITERIA.weights_pct section");
        return BTreeMap::new();
    };

    entries
        .iter()
        .map(|(layer, value)| (layer.clone(), normalize_weight(value)))
        .collect()
}

/// Build per-layer requirements from normalized weights.
///
/// Identifiers outside the compiled-in taxonomy keep their weight but get an
/// empty keyword set and a generic description (permissive by design of the
/// matrix format; the mismatch is logged for operators).
pub fn layer_requirements(weights: &BTreeMap<String, u32>) -> BTreeMap<String, LayerRequirement> {
    weights
        .iter()
        .map(|(id, &weight)| {
            let requirement = match Layer::from_identifier(id) {
                Some(layer) => LayerRequirement::new(
                    weight,
                    layer.description().to_string(),
                    layer.keywords().iter().map(|k| k.to_string()).collect(),
                ),
                None => {
                    warn!(layer = %id, "weight entry has no compiled-in taxonomy layer");
                    LayerRequirement::new(
                        weight,
                        layers::UNKNOWN_LAYER_DESCRIPTION.to_string(),
                        Vec::new(),
                    )
                }
            };
            (id.clone(), requirement)
        })
        .collect()
}

/// Count the layers defined under `TAXONOMY.layers`.
pub fn taxonomy_layer_count(matrix: &Value) -> usize {
    matrix
        .pointer("/TAXONOMY/layers")
        .and_then(Value::as_object)
        .map(|layers| layers.len())
        .unwrap_or(0)
}
