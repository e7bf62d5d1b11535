//! Engine configuration.
//!
//! All knobs are supplied externally at construction — nothing in the scoring
//! logic hardcodes a remote location, key, or threshold.

mod defaults;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Matrix acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Base URL the encrypted matrix is served from.
    pub base_url: String,
    /// Path to the encrypted matrix document, relative to `base_url`.
    pub matrix_path: String,
    /// Symmetric key, base64-encoded. `None` means decryption cannot proceed.
    /// Supplied out of band; never embedded.
    pub encryption_key: Option<String>,
    /// Cache time-to-live in milliseconds.
    pub cache_ttl_ms: u64,
    /// Fetch timeout in milliseconds.
    pub fetch_timeout_ms: u64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_MATRIX_BASE_URL.to_string(),
            matrix_path: defaults::DEFAULT_MATRIX_PATH.to_string(),
            encryption_key: None,
            cache_ttl_ms: constants::DEFAULT_CACHE_TTL_MS,
            fetch_timeout_ms: constants::DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

/// Compliance gate configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Acceptance window lower bound (percentage, inclusive).
    pub threshold_min: f64,
    /// Acceptance window upper bound (percentage, inclusive).
    pub threshold_max: f64,
    /// Maximum scoring attempts before the gate gives up.
    pub max_attempts: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold_min: constants::DEFAULT_THRESHOLD_MIN,
            threshold_max: constants::DEFAULT_THRESHOLD_MAX,
            max_attempts: constants::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchonConfig {
    pub matrix: MatrixConfig,
    pub gate: GateConfig,
}
