//! The closed layer taxonomy.
//!
//! The remote matrix supplies *weights only*; descriptions and keyword sets
//! are compiled into the engine so that an unknown-layer typo is caught at
//! match sites instead of silently producing an empty lookup.

use serde::{Deserialize, Serialize};

/// One architectural concern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    FrontendUi,
    BackendApi,
    DataLayer,
    MlServices,
    DevopsCicd,
    InfraRuntime,
    Observability,
    SecurityCompliance,
}

impl Layer {
    /// All known layers, in canonical order.
    pub const ALL: [Layer; 8] = [
        Layer::FrontendUi,
        Layer::BackendApi,
        Layer::DataLayer,
        Layer::MlServices,
        Layer::DevopsCicd,
        Layer::InfraRuntime,
        Layer::Observability,
        Layer::SecurityCompliance,
    ];

    /// Resolve a matrix layer identifier.
    ///
    /// Accepts both the snake_case identifiers used in `weights_pct`
    /// (e.g. `devops_ci_cd`, `ml_services_optional`) and the upper-case
    /// `*_WEIGHT` forms some matrix revisions carry.
    pub fn from_identifier(id: &str) -> Option<Layer> {
        match id.to_ascii_lowercase().as_str() {
            "frontend_ui" | "frontend_ui_weight" => Some(Layer::FrontendUi),
            "backend_api" | "backend_api_weight" => Some(Layer::BackendApi),
            "data_layer" | "data_layer_weight" => Some(Layer::DataLayer),
            "ml_services_optional" | "ml_services" | "ml_services_weight" => {
                Some(Layer::MlServices)
            }
            "devops_ci_cd" | "devops_cicd" | "devops_cicd_weight" => Some(Layer::DevopsCicd),
            "infra_runtime" | "infra_runtime_weight" => Some(Layer::InfraRuntime),
            "observability" | "observability_weight" => Some(Layer::Observability),
            "security_compliance" | "security_compliance_weight" => {
                Some(Layer::SecurityCompliance)
            }
            _ => None,
        }
    }

    /// Human-readable description of the concern this layer covers.
    pub fn description(&self) -> &'static str {
        match self {
            Layer::FrontendUi => "User interface, components, and user experience design",
            Layer::BackendApi => "Server-side APIs, business logic, and service architecture",
            Layer::DataLayer => "Data storage, databases, models, and persistence layers",
            Layer::MlServices => "Machine learning services, AI integration, and data processing",
            Layer::DevopsCicd => {
                "CI/CD pipelines, deployment automation, and development workflows"
            }
            Layer::InfraRuntime => {
                "Infrastructure, cloud services, containers, and runtime environments"
            }
            Layer::Observability => {
                "Monitoring, logging, metrics, tracing, and system observability"
            }
            Layer::SecurityCompliance => {
                "Security measures, authentication, authorization, and compliance"
            }
        }
    }

    /// Keyword set used for scoring this layer.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Layer::FrontendUi => &[
                "frontend",
                "ui",
                "user interface",
                "react",
                "vue",
                "angular",
                "component",
                "css",
                "html",
                "javascript",
            ],
            Layer::BackendApi => &[
                "backend",
                "api",
                "server",
                "rest",
                "graphql",
                "microservice",
                "service",
                "endpoint",
                "controller",
            ],
            Layer::DataLayer => &[
                "database",
                "data",
                "storage",
                "sql",
                "nosql",
                "mongodb",
                "postgresql",
                "redis",
                "model",
                "schema",
            ],
            Layer::MlServices => &[
                "machine learning",
                "ml",
                "ai",
                "model",
                "tensorflow",
                "pytorch",
                "data science",
                "algorithm",
            ],
            Layer::DevopsCicd => &[
                "devops",
                "ci/cd",
                "pipeline",
                "docker",
                "kubernetes",
                "deployment",
                "automation",
                "jenkins",
            ],
            Layer::InfraRuntime => &[
                "infrastructure",
                "cloud",
                "aws",
                "azure",
                "gcp",
                "container",
                "kubernetes",
                "runtime",
            ],
            Layer::Observability => &[
                "monitoring",
                "logging",
                "metrics",
                "tracing",
                "observability",
                "prometheus",
                "grafana",
            ],
            Layer::SecurityCompliance => &[
                "security",
                "authentication",
                "authorization",
                "compliance",
                "encryption",
                "oauth",
            ],
        }
    }
}

/// Fallback description for identifiers outside the closed taxonomy.
pub const UNKNOWN_LAYER_DESCRIPTION: &str = "Architecture layer component";

/// Turn a matrix identifier into a display name, e.g.
/// `frontend_ui` → `FRONTEND UI`, `BACKEND_API_WEIGHT` → `BACKEND API`.
pub fn display_name(identifier: &str) -> String {
    let upper = identifier.to_ascii_uppercase().replace('_', " ");
    upper.strip_suffix(" WEIGHT").unwrap_or(&upper).to_string()
}
