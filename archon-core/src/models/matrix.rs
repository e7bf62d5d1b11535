use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The encrypted matrix document as published upstream.
///
/// Produced externally; consumed once per fetch and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedMatrixPackage {
    /// Ciphertext, base64-encoded.
    pub encrypted: String,
    /// Initialization vector, base64-encoded.
    pub iv: String,
    /// SHA-256 hex digest of the UTF-8 plaintext.
    pub hash: String,
    /// Cipher identifier; only `aes-256-cbc` is accepted.
    pub algorithm: String,
}

/// Cache state without forcing a load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheStatus {
    /// Whether a decrypted matrix is currently held.
    pub cached: bool,
    /// Age of the cached entry in milliseconds, if any.
    pub age_ms: Option<u64>,
    /// Configured time-to-live in milliseconds.
    pub ttl_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health report for the matrix subsystem.
///
/// Never an error: an unhealthy report carries the failure message instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixHealth {
    pub status: HealthStatus,
    /// Number of layers defined under `TAXONOMY.layers`.
    pub layer_count: usize,
    /// Sum of all normalized weights.
    pub total_weight: u64,
    pub cache: CacheStatus,
    /// Load failure message when unhealthy.
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Condensed matrix facts attached to scoring responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub health: HealthStatus,
    pub layer_count: usize,
    pub total_weight: u64,
}
