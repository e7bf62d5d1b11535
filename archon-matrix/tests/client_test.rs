//! MatrixClient integration tests: fetch, cache TTL, extraction, health.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use archon_core::config::MatrixConfig;
use archon_core::errors::MatrixError;
use archon_core::models::{EncryptedMatrixPackage, HealthStatus};
use archon_matrix::MatrixClient;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

const KEY: [u8; 32] = [42u8; 32];
const IV: [u8; 16] = [1u8; 16];

fn matrix_json() -> String {
    serde_json::json!({
        "TAXONOMY": {
            "layers": {
                "frontend_ui": { "keywords": ["react"] },
                "backend_api": { "keywords": ["api"] },
                "data_layer": { "keywords": ["sql"] }
            }
        },
        "EVAL_CRITERIA": {
            "weights_pct": {
                "frontend_ui": "10_PERCENT",
                "backend_api": 25,
                "data_layer": "15_PERCENT",
                "ml_services_optional": 0
            }
        }
    })
    .to_string()
}

fn encrypted_package() -> EncryptedMatrixPackage {
    let plaintext = matrix_json();
    let ciphertext = Aes256CbcEnc::new_from_slices(&KEY, &IV)
        .unwrap()
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    EncryptedMatrixPackage {
        encrypted: BASE64.encode(ciphertext),
        iv: BASE64.encode(IV),
        hash: hex::encode(Sha256::digest(plaintext.as_bytes())),
        algorithm: "aes-256-cbc".to_string(),
    }
}

fn config(server: &MockServer, ttl_ms: u64) -> MatrixConfig {
    MatrixConfig {
        base_url: server.uri(),
        matrix_path: "matrix/encrypted-matrix.json".to_string(),
        encryption_key: Some(BASE64.encode(KEY)),
        cache_ttl_ms: ttl_ms,
        fetch_timeout_ms: 5_000,
    }
}

async fn serve_package(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/matrix/encrypted-matrix.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(encrypted_package()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ─── Cache behavior ───

#[tokio::test]
async fn load_within_ttl_does_not_refetch() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let first = client.load().await.unwrap();
    let second = client.load().await.unwrap();
    assert_eq!(first, second);

    let status = client.cache_status().await;
    assert!(status.cached);
    assert!(status.age_ms.is_some());
}

#[tokio::test]
async fn clear_forces_refetch() {
    let server = MockServer::start().await;
    serve_package(&server, 2).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    client.load().await.unwrap();
    client.clear_cache().await;
    assert!(!client.cache_status().await.cached);
    client.load().await.unwrap();
}

#[tokio::test]
async fn expired_ttl_refetches() {
    let server = MockServer::start().await;
    serve_package(&server, 2).await;

    let client = MatrixClient::new(&config(&server, 0)).unwrap();
    client.load().await.unwrap();
    client.load().await.unwrap();
}

#[tokio::test]
async fn concurrent_cold_loads_fetch_once() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = std::sync::Arc::new(MatrixClient::new(&config(&server, 3_600_000)).unwrap());
    let a = tokio::spawn({
        let client = client.clone();
        async move { client.load().await }
    });
    let b = tokio::spawn({
        let client = client.clone();
        async move { client.load().await }
    });
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();
}

// ─── Fetch failure mapping ───

#[tokio::test]
async fn missing_upstream_maps_to_not_synced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let err = client.load().await.unwrap_err();
    assert!(matches!(err, MatrixError::NotSynced));
}

#[tokio::test]
async fn server_error_maps_to_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let err = client.load().await.unwrap_err();
    assert!(matches!(err, MatrixError::Fetch { .. }));
}

// ─── Extraction through the client ───

#[tokio::test]
async fn extracts_normalized_weights() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let weights = client.layer_weights().await.unwrap();
    assert_eq!(weights["frontend_ui"], 10);
    assert_eq!(weights["backend_api"], 25);
    assert_eq!(weights["data_layer"], 15);
    assert_eq!(weights["ml_services_optional"], 0);
}

#[tokio::test]
async fn requirements_use_compiled_in_taxonomy() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let reqs = client.layer_requirements().await.unwrap();

    let backend = &reqs["backend_api"];
    assert!(backend.required);
    assert_eq!(backend.min_mentions, 3);
    assert!(backend.keywords.contains(&"graphql".to_string()));

    let ml = &reqs["ml_services_optional"];
    assert!(!ml.required);
    assert_eq!(ml.min_mentions, 0);
}

#[tokio::test]
async fn constraints_render_from_live_matrix() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let bundle = client.build_constraints(87.0, 97.0).await.unwrap();
    assert!(bundle.constraints.contains("BACKEND API: 25% importance"));
    assert!(bundle.constraints.contains("Target score range: 87-97% compliance"));
    assert_eq!(bundle.total_weight, 50);
}

// ─── Health ───

#[tokio::test]
async fn health_reports_layer_count_and_total_weight() {
    let server = MockServer::start().await;
    serve_package(&server, 1).await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let health = client.health().await;
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.layer_count, 3);
    assert_eq!(health.total_weight, 50);
    assert!(health.cache.cached);
    assert!(health.error.is_none());
}

#[tokio::test]
async fn health_surfaces_load_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = MatrixClient::new(&config(&server, 3_600_000)).unwrap();
    let health = client.health().await;
    assert_eq!(health.status, HealthStatus::Unhealthy);
    assert!(health.error.unwrap().contains("not found"));
}
