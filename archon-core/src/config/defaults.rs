//! Default values for configuration fields.

/// Where the encrypted matrix is published by default.
pub const DEFAULT_MATRIX_BASE_URL: &str =
    "https://raw.githubusercontent.com/archon/matrix-registry/main";

/// Default relative path to the encrypted matrix document.
pub const DEFAULT_MATRIX_PATH: &str = "matrix/encrypted-matrix.json";
