//! Decryption and integrity verification of the matrix package.
//!
//! AES-256-CBC with PKCS#7 padding; plaintext integrity is a SHA-256 hex
//! digest compared byte-for-byte against the package's `hash` field. Nothing
//! is returned unless every check passes.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use archon_core::constants::SUPPORTED_ALGORITHM;
use archon_core::errors::MatrixError;
use archon_core::models::EncryptedMatrixPackage;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha2::{Digest, Sha256};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt an encrypted matrix package into its structured form.
///
/// `key_b64` is the symmetric key, base64-encoded, supplied out of band.
/// Failure modes, in check order: unsupported algorithm, missing key, key/IV
/// decode failure, integrity mismatch (bad padding or digest), malformed
/// plaintext.
pub fn decrypt_matrix(
    package: &EncryptedMatrixPackage,
    key_b64: Option<&str>,
) -> Result<serde_json::Value, MatrixError> {
    if package.algorithm != SUPPORTED_ALGORITHM {
        return Err(MatrixError::UnsupportedAlgorithm {
            algorithm: package.algorithm.clone(),
        });
    }

    let key_b64 = key_b64.ok_or(MatrixError::MissingKey)?;

    let key = BASE64.decode(key_b64).map_err(|e| MatrixError::Decrypt {
        reason: format!("invalid key encoding: {e}"),
    })?;
    let iv = BASE64.decode(&package.iv).map_err(|e| MatrixError::Decrypt {
        reason: format!("invalid IV encoding: {e}"),
    })?;
    let ciphertext = BASE64
        .decode(&package.encrypted)
        .map_err(|e| MatrixError::Decrypt {
            reason: format!("invalid ciphertext encoding: {e}"),
        })?;

    let plaintext = Aes256CbcDec::new_from_slices(&key, &iv)
        .map_err(|e| MatrixError::Decrypt {
            reason: format!("bad key or IV length: {e}"),
        })?
        // PKCS#7 unpadding only fails when the ciphertext was corrupted or
        // the key is wrong; either way the content cannot be trusted.
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| MatrixError::IntegrityFailure)?;

    // Integrity check on the raw bytes, before any interpretation: a tampered
    // ciphertext must report as an integrity failure no matter how it garbles.
    let digest = hex::encode(Sha256::digest(&plaintext));
    if digest != package.hash.to_ascii_lowercase() {
        return Err(MatrixError::IntegrityFailure);
    }

    let plaintext = String::from_utf8(plaintext).map_err(|e| MatrixError::MalformedMatrix {
        reason: format!("plaintext is not UTF-8: {e}"),
    })?;

    serde_json::from_str(&plaintext).map_err(|e| MatrixError::MalformedMatrix {
        reason: e.to_string(),
    })
}
