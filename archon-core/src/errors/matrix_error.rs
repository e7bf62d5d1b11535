/// Matrix acquisition errors: fetch, decrypt, integrity, parse.
///
/// The six variants are deliberately distinct — operators diagnose a missing
/// upstream sync, a bad key, and a corrupted blob very differently.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// The remote responded 404: the encrypted matrix has not been published.
    /// Recoverable by the publisher syncing, not by an immediate retry.
    #[error("encrypted matrix not found in repository; has it been synced?")]
    NotSynced,

    /// Transient transport failure (timeout, DNS, 5xx). Retryable by the caller.
    #[error("failed to fetch matrix: {reason}")]
    Fetch { reason: String },

    /// The package names a cipher the engine does not support.
    #[error("unsupported encryption algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// No symmetric key was supplied at construction.
    #[error("encryption key not provided")]
    MissingKey,

    /// Key or IV failed to decode, or had the wrong length.
    #[error("matrix decryption failed: {reason}")]
    Decrypt { reason: String },

    /// The decrypted bytes fail verification: bad padding or a SHA-256
    /// digest that does not match the package hash. No data is returned.
    #[error("matrix integrity verification failed")]
    IntegrityFailure,

    /// The plaintext passed verification but is not valid structured data.
    #[error("malformed matrix document: {reason}")]
    MalformedMatrix { reason: String },
}
