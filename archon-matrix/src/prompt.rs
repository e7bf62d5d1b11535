//! Constraint prompt rendering.
//!
//! Turns the extracted requirement data into guidance text that primes an
//! external generator to land inside the acceptance window. Pure function of
//! the extractor's output.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use archon_core::layers::display_name;
use archon_core::models::LayerRequirement;

/// Rendered constraints plus the data they were rendered from.
#[derive(Debug, Clone)]
pub struct ConstraintBundle {
    pub constraints: String,
    pub weights: BTreeMap<String, u32>,
    pub requirements: BTreeMap<String, LayerRequirement>,
    pub total_weight: u64,
}

/// Render requirement guidance: highest weight first, zero-weight layers
/// excluded, followed by fixed scoring-criteria and output-format guidance.
pub fn build_constraints(
    requirements: &BTreeMap<String, LayerRequirement>,
    threshold_min: f64,
    threshold_max: f64,
) -> ConstraintBundle {
    let mut text = String::from("ARCHITECTURE REQUIREMENTS:\n\n");
    text.push_str("Your architecture must address these weighted components:\n\n");

    let mut ordered: Vec<(&String, &LayerRequirement)> = requirements
        .iter()
        .filter(|(_, req)| req.weight > 0)
        .collect();
    // BTreeMap iteration gives a stable tie-break by identifier.
    ordered.sort_by(|a, b| b.1.weight.cmp(&a.1.weight));

    for (id, req) in &ordered {
        let _ = writeln!(text, "{}: {}% importance", display_name(id.as_str()), req.weight);
        let _ = writeln!(text, "  \u{2022} {}", req.description);
        let _ = writeln!(text, "  \u{2022} Include specific details and technologies\n");
    }

    text.push_str("SCORING CRITERIA:\n");
    text.push_str("\u{2022} Each layer must be adequately addressed proportional to its weight\n");
    text.push_str("\u{2022} Use specific technologies and implementation details\n");
    text.push_str("\u{2022} Explain architectural decisions and trade-offs\n");
    let _ = writeln!(
        text,
        "\u{2022} Target score range: {threshold_min}-{threshold_max}% compliance\n"
    );

    text.push_str("OUTPUT FORMAT:\n");
    text.push_str("\u{2022} Provide natural language description (NOT JSON)\n");
    text.push_str("\u{2022} Include all required architectural layers\n");
    text.push_str("\u{2022} Use technical terminology appropriately\n");

    let weights: BTreeMap<String, u32> = requirements
        .iter()
        .map(|(id, req)| (id.clone(), req.weight))
        .collect();
    let total_weight = weights.values().map(|&w| w as u64).sum();

    ConstraintBundle {
        constraints: text,
        weights,
        requirements: requirements.clone(),
        total_weight,
    }
}

/// Append the rendered constraints to a caller-supplied prompt.
pub fn enhance_prompt(user_prompt: &str, bundle: &ConstraintBundle) -> String {
    format!(
        "{user_prompt}\n\n{}\n\nRemember: Focus on delivering a comprehensive architecture that \
         addresses all weighted components appropriately. The architecture should be practical, \
         well-reasoned, and demonstrate clear understanding of each layer's requirements.",
        bundle.constraints
    )
}
