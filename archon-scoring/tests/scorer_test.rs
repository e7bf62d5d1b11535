//! Scorer tests: mention counting, diversity bonus, gaps, tiering.

use std::collections::BTreeMap;

use archon_core::models::{LayerRequirement, ThresholdWindow, Tier};
use archon_scoring::Scorer;
use proptest::prelude::*;

const WINDOW: ThresholdWindow = ThresholdWindow { min: 87.0, max: 97.0 };

fn scorer() -> Scorer {
    Scorer::new(WINDOW)
}

fn req(weight: u32, keywords: &[&str]) -> LayerRequirement {
    LayerRequirement::new(
        weight,
        "test layer".to_string(),
        keywords.iter().map(|k| k.to_string()).collect(),
    )
}

/// The full default taxonomy with realistic weights summing to 100.
fn full_requirements() -> BTreeMap<String, LayerRequirement> {
    use archon_core::Layer;
    let weights = [
        ("frontend_ui", Layer::FrontendUi, 15),
        ("backend_api", Layer::BackendApi, 20),
        ("data_layer", Layer::DataLayer, 15),
        ("ml_services_optional", Layer::MlServices, 5),
        ("devops_ci_cd", Layer::DevopsCicd, 10),
        ("infra_runtime", Layer::InfraRuntime, 15),
        ("observability", Layer::Observability, 10),
        ("security_compliance", Layer::SecurityCompliance, 10),
    ];
    weights
        .into_iter()
        .map(|(id, layer, weight)| {
            (
                id.to_string(),
                LayerRequirement::new(
                    weight,
                    layer.description().to_string(),
                    layer.keywords().iter().map(|k| k.to_string()).collect(),
                ),
            )
        })
        .collect()
}

// ─── Keyword-free text ───

#[test]
fn keyword_free_text_scores_zero_with_full_gap_list() {
    let reqs = full_requirements();
    // No layer keyword appears even as a substring of this text.
    let summary = scorer().score("xyzzy fnord glorp wibble", &reqs);

    assert_eq!(summary.percentage, 0.0);
    assert_eq!(summary.tier, Tier::Fail);
    assert!(!summary.compliant);
    // Every weighted layer is flagged as not addressed.
    assert_eq!(summary.gaps.len(), 8);
    assert!(summary.gaps.iter().all(|g| g.issue == "Not addressed"));
}

// ─── Saturated text ───

#[test]
fn keyword_saturated_text_lands_at_or_above_good() {
    let reqs = full_requirements();
    // Hit every keyword of every layer, repeated past each min_mentions.
    let mut text = String::new();
    for req in reqs.values() {
        for keyword in &req.keywords {
            for _ in 0..=req.min_mentions {
                text.push_str(keyword);
                text.push(' ');
            }
        }
    }
    let summary = scorer().score(&text, &reqs);
    assert!(matches!(
        summary.tier,
        Tier::Good | Tier::Optimal | Tier::OverEngineered
    ));
    assert!(summary.gaps.is_empty());
}

// ─── Deterministic arithmetic fixtures ───

#[test]
fn single_layer_partial_diversity() {
    let mut reqs = BTreeMap::new();
    reqs.insert("backend_api".to_string(), req(10, &["api", "rest"]));

    // min_mentions = 1, mentions = 1 → mention_score 1.0;
    // 1 of 2 keywords present → diversity 0.5;
    // layer = (0.7 + 0.15) * 10 = 8.5 → 85%.
    let summary = scorer().score("our api is documented", &reqs);
    assert_eq!(summary.percentage, 85.0);
    assert_eq!(summary.tier, Tier::Good);
    assert!(!summary.compliant);

    let detail = &summary.details["backend_api"];
    assert_eq!(detail.mentions, 1);
    assert_eq!(detail.unique_keywords, 1);
    assert_eq!(detail.total_keywords, 2);
    assert_eq!(detail.score, 8.5);
}

#[test]
fn full_coverage_hits_one_hundred_percent() {
    let mut reqs = BTreeMap::new();
    reqs.insert("backend_api".to_string(), req(10, &["api", "rest"]));

    let summary = scorer().score("api and rest", &reqs);
    assert_eq!(summary.percentage, 100.0);
    assert_eq!(summary.tier, Tier::OverEngineered);
    assert!(!summary.compliant);
}

#[test]
fn display_rounding_never_crosses_the_window_boundary() {
    // (0.7 * 2/3 + 0.3 * 2/3) * 30 = 20 → exactly 66.666…%, which displays
    // as 66.67 but must still classify below a 66.67 window minimum.
    let mut reqs = BTreeMap::new();
    reqs.insert(
        "backend_api".to_string(),
        req(30, &["api", "rest", "endpoint"]),
    );

    let tight = Scorer::new(ThresholdWindow { min: 66.67, max: 97.0 });
    let summary = tight.score("the api uses rest", &reqs);
    assert_eq!(summary.percentage, 66.67);
    assert_eq!(summary.tier, Tier::Basic);
    assert!(!summary.compliant);
}

#[test]
fn compliant_window_fixture() {
    // 2 of 3 keywords present, mention threshold met:
    // (0.7 * 1.0 + 0.3 * 2/3) * 10 = 9.0 → 90% → OPTIMAL.
    let mut reqs = BTreeMap::new();
    reqs.insert(
        "backend_api".to_string(),
        req(10, &["api", "rest", "endpoint"]),
    );

    let summary = scorer().score("the api uses rest", &reqs);
    assert_eq!(summary.percentage, 90.0);
    assert_eq!(summary.tier, Tier::Optimal);
    assert!(summary.compliant);
}

// ─── Matching semantics ───

#[test]
fn mentions_use_word_boundaries() {
    let mut reqs = BTreeMap::new();
    reqs.insert("backend_api".to_string(), req(10, &["api"]));

    // "api" inside "rapid" is not a mention, but the substring still counts
    // for diversity.
    let summary = scorer().score("rapid iteration", &reqs);
    let detail = &summary.details["backend_api"];
    assert_eq!(detail.mentions, 0);
    assert_eq!(detail.unique_keywords, 1);
}

#[test]
fn matching_is_case_insensitive() {
    let mut reqs = BTreeMap::new();
    reqs.insert("data_layer".to_string(), req(10, &["postgresql"]));

    let summary = scorer().score("PostgreSQL with read replicas", &reqs);
    assert_eq!(summary.details["data_layer"].mentions, 1);
}

#[test]
fn extra_mentions_earn_no_extra_credit() {
    let mut reqs = BTreeMap::new();
    reqs.insert("backend_api".to_string(), req(10, &["api"]));

    let once = scorer().score("api", &reqs);
    let many = scorer().score("api api api api api api", &reqs);
    assert_eq!(once.percentage, many.percentage);
}

// ─── Edge cases ───

#[test]
fn zero_weight_layers_are_skipped() {
    let mut reqs = BTreeMap::new();
    reqs.insert("ml_services_optional".to_string(), req(0, &["ml", "ai"]));

    let summary = scorer().score("ml and ai everywhere", &reqs);
    assert_eq!(summary.percentage, 0.0);
    assert_eq!(summary.max_possible_score, 0);
    assert!(summary.details.is_empty());
    assert!(summary.gaps.is_empty());
}

#[test]
fn insufficient_detail_gap_reason() {
    // One mention against a high threshold: some score, below half weight.
    let mut reqs = BTreeMap::new();
    reqs.insert(
        "backend_api".to_string(),
        req(50, &["api", "rest", "graphql", "microservice", "endpoint"]),
    );

    let summary = scorer().score("an api", &reqs);
    assert_eq!(summary.gaps.len(), 1);
    assert_eq!(summary.gaps[0].issue, "Insufficient detail");
    assert_eq!(summary.gaps[0].layer, "BACKEND API");
}

#[test]
fn scoring_is_idempotent() {
    let reqs = full_requirements();
    let text = "react frontend with a rest api backend, postgresql storage, \
                docker deployment and prometheus monitoring";
    let first = scorer().score(text, &reqs);
    let second = scorer().score(text, &reqs);
    assert_eq!(first.percentage, second.percentage);
    assert_eq!(first.tier, second.tier);
    assert_eq!(first.gaps.len(), second.gaps.len());
}

// ─── Properties ───

proptest! {
    #[test]
    fn percentage_always_within_bounds(text in ".{0,400}") {
        let summary = scorer().score(&text, &full_requirements());
        prop_assert!(summary.percentage >= 0.0);
        prop_assert!(summary.percentage <= 100.0);
    }

    #[test]
    fn compliance_iff_window(text in "[a-z ]{0,200}") {
        let summary = scorer().score(&text, &full_requirements());
        // Compliance is decided on the exact ratio, not the displayed figure.
        let exact = summary.total_score / summary.max_possible_score as f64 * 100.0;
        let in_window = exact >= 87.0 && exact <= 97.0;
        prop_assert_eq!(summary.compliant, in_window);
    }
}
