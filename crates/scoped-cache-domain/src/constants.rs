//! Domain layer constants
//!
//! Default cache bounds and the layout of per-scope configuration keys.
//! Infrastructure-specific constants live in `scoped_cache_infrastructure::constants`.

// ============================================================================
// CACHE BOUND DEFAULTS
// ============================================================================

/// Maximum number of entries in a scoped cache when none is configured
pub const DEFAULT_CACHE_MAX_SIZE: u64 = 10;

/// Expire-after-write duration in seconds when none is configured
pub const DEFAULT_CACHE_EXPIRE_SECS: u64 = 30;

/// Longest accepted expire-after-write duration in seconds (1000 years)
///
/// Larger configured values are ignored in favour of the default.
pub const MAX_CACHE_EXPIRE_SECS: u64 = 1000 * 365 * 24 * 60 * 60;

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Prefix shared by every scoped cache configuration key
pub const CONFIG_KEY_PREFIX: &str = "scoped.cache";

/// Key suffix holding the maximum entry count
pub const MAX_SIZE_KEY_SUFFIX: &str = "max-size";

/// Key suffix holding the expire-after-write duration in seconds
pub const EXPIRE_KEY_SUFFIX: &str = "expire-in-seconds-after-write";

/// Build the configuration key for one setting of a named cache
pub fn cache_setting_key(name: &str, suffix: &str) -> String {
    format!("{CONFIG_KEY_PREFIX}.{name}.{suffix}")
}

/// Configuration key holding the maximum entry count of `name`
pub fn max_size_key(name: &str) -> String {
    cache_setting_key(name, MAX_SIZE_KEY_SUFFIX)
}

/// Configuration key holding the expire-after-write seconds of `name`
pub fn expire_key(name: &str) -> String {
    cache_setting_key(name, EXPIRE_KEY_SUFFIX)
}
