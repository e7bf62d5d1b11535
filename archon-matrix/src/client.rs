//! MatrixClient — orchestrates fetch, decrypt, cache, and extraction.

use std::collections::BTreeMap;

use archon_core::config::MatrixConfig;
use archon_core::errors::MatrixError;
use archon_core::models::{CacheStatus, HealthStatus, LayerRequirement, MatrixHealth};
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheEntry, MatrixCache};
use crate::crypto::decrypt_matrix;
use crate::extract;
use crate::fetch::MatrixFetcher;
use crate::prompt::{self, ConstraintBundle};

/// Client for the remote encrypted matrix.
///
/// Owns the single cache slot; each client instance has independent cache
/// state, so tests and embedders get isolation for free.
#[derive(Debug)]
pub struct MatrixClient {
    fetcher: MatrixFetcher,
    cache: MatrixCache,
    encryption_key: Option<String>,
}

impl MatrixClient {
    pub fn new(config: &MatrixConfig) -> Result<Self, MatrixError> {
        Ok(Self {
            fetcher: MatrixFetcher::new(
                &config.base_url,
                &config.matrix_path,
                config.fetch_timeout_ms,
            )?,
            cache: MatrixCache::new(config.cache_ttl_ms),
            encryption_key: config.encryption_key.clone(),
        })
    }

    /// Return the decrypted matrix, fetching and decrypting only when the
    /// cache is empty or expired.
    ///
    /// The slot mutex is held across the refresh, so concurrent cold-cache
    /// callers wait for one fetch instead of each performing their own.
    pub async fn load(&self) -> Result<Value, MatrixError> {
        let mut slot = self.cache.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if !entry.expired(self.cache.ttl_ms()) {
                debug!(age_ms = entry.age_ms(), "using cached matrix");
                return Ok(entry.matrix.clone());
            }
        }

        info!("loading fresh matrix");
        let package = self.fetcher.fetch().await?;
        let matrix = decrypt_matrix(&package, self.encryption_key.as_deref())?;
        info!(
            top_level_keys = matrix.as_object().map(|m| m.len()).unwrap_or(0),
            "matrix loaded"
        );

        *slot = Some(CacheEntry::new(matrix.clone()));
        Ok(matrix)
    }

    /// Evict the cached matrix unconditionally.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Cache presence, age, and TTL without forcing a load.
    pub async fn cache_status(&self) -> CacheStatus {
        self.cache.status().await
    }

    /// Extract normalized per-layer weights from the current matrix.
    pub async fn layer_weights(&self) -> Result<BTreeMap<String, u32>, MatrixError> {
        let matrix = self.load().await?;
        Ok(extract::layer_weights(&matrix))
    }

    /// Extract full per-layer requirements from the current matrix.
    pub async fn layer_requirements(
        &self,
    ) -> Result<BTreeMap<String, LayerRequirement>, MatrixError> {
        let weights = self.layer_weights().await?;
        Ok(extract::layer_requirements(&weights))
    }

    /// Render constraint guidance for an external generator.
    pub async fn build_constraints(
        &self,
        threshold_min: f64,
        threshold_max: f64,
    ) -> Result<ConstraintBundle, MatrixError> {
        let requirements = self.layer_requirements().await?;
        Ok(prompt::build_constraints(
            &requirements,
            threshold_min,
            threshold_max,
        ))
    }

    /// Health report: layer count, total weight, cache state.
    ///
    /// Never fails — a load failure produces an unhealthy report carrying the
    /// failure message.
    pub async fn health(&self) -> MatrixHealth {
        match self.load().await {
            Ok(matrix) => {
                let weights = extract::layer_weights(&matrix);
                MatrixHealth {
                    status: HealthStatus::Healthy,
                    layer_count: extract::taxonomy_layer_count(&matrix),
                    total_weight: weights.values().map(|&w| w as u64).sum(),
                    cache: self.cache.status().await,
                    error: None,
                    timestamp: Utc::now(),
                }
            }
            Err(e) => MatrixHealth {
                status: HealthStatus::Unhealthy,
                layer_count: 0,
                total_weight: 0,
                cache: self.cache.status().await,
                error: Some(e.to_string()),
                timestamp: Utc::now(),
            },
        }
    }
}
