/// Archon engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The single supported cipher identifier for encrypted matrix packages.
pub const SUPPORTED_ALGORITHM: &str = "aes-256-cbc";

/// User-Agent header sent on matrix fetches.
pub const USER_AGENT: &str = "archon-matrix/1.0";

/// Default matrix fetch timeout (milliseconds).
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Default matrix cache time-to-live (milliseconds). One hour.
pub const DEFAULT_CACHE_TTL_MS: u64 = 3_600_000;

/// Default acceptance window lower bound (percentage).
pub const DEFAULT_THRESHOLD_MIN: f64 = 87.0;

/// Default acceptance window upper bound (percentage).
pub const DEFAULT_THRESHOLD_MAX: f64 = 97.0;

/// Default maximum compliance gate attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Blend weights for the per-layer score: mention ratio vs keyword diversity.
pub const MENTION_BLEND: f64 = 0.7;
pub const DIVERSITY_BLEND: f64 = 0.3;
