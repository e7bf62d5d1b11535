//! # archon-matrix
//!
//! Acquisition side of the Archon engine: fetches the encrypted matrix over
//! HTTP, decrypts and integrity-checks it, caches the result with a TTL, and
//! derives per-layer weights and requirements from it.

pub mod cache;
pub mod client;
pub mod crypto;
pub mod extract;
pub mod fetch;
pub mod prompt;

pub use client::MatrixClient;
pub use fetch::MatrixFetcher;
