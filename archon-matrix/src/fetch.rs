//! Remote retrieval of the encrypted matrix package.
//!
//! One GET with a bounded timeout; no retries here — retrying belongs to the
//! compliance gate's caller, not the transport layer.

use std::time::Duration;

use archon_core::constants::USER_AGENT;
use archon_core::errors::MatrixError;
use archon_core::models::EncryptedMatrixPackage;
use reqwest::StatusCode;
use tracing::debug;

/// Fetches the encrypted matrix from its published location.
#[derive(Debug, Clone)]
pub struct MatrixFetcher {
    client: reqwest::Client,
    url: String,
}

impl MatrixFetcher {
    /// Build a fetcher for `{base_url}/{matrix_path}` with the given timeout.
    pub fn new(base_url: &str, matrix_path: &str, timeout_ms: u64) -> Result<Self, MatrixError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MatrixError::Fetch {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            url: format!("{}/{}", base_url.trim_end_matches('/'), matrix_path),
        })
    }

    /// The resolved fetch URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieve the encrypted package.
    ///
    /// 404 means the matrix has not been published upstream and maps to
    /// [`MatrixError::NotSynced`]; every other failure (timeout, DNS, 5xx,
    /// bad body) is a [`MatrixError::Fetch`].
    pub async fn fetch(&self) -> Result<EncryptedMatrixPackage, MatrixError> {
        debug!(url = %self.url, "fetching encrypted matrix");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MatrixError::Fetch {
                reason: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(MatrixError::NotSynced);
        }
        if !response.status().is_success() {
            return Err(MatrixError::Fetch {
                reason: format!("unexpected status {}", response.status()),
            });
        }

        response
            .json::<EncryptedMatrixPackage>()
            .await
            .map_err(|e| MatrixError::Fetch {
                reason: format!("invalid package body: {e}"),
            })
    }
}
