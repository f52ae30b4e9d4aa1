//! Cache bound settings

use crate::constants::{DEFAULT_CACHE_EXPIRE_SECS, DEFAULT_CACHE_MAX_SIZE};
use std::time::Duration;

/// Capacity and expiration bounds of a single named cache
///
/// Resolved once, when the cache is created. A cache created after a
/// clear-all resolves its settings again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Maximum number of entries
    pub max_size: u64,
    /// Entries expire this long after they were written
    pub expire_after_write: Duration,
}

impl CacheSettings {
    /// Create settings from explicit bounds
    pub fn new(max_size: u64, expire_after_write: Duration) -> Self {
        Self {
            max_size,
            expire_after_write,
        }
    }

    /// Create settings with the expiration given in whole seconds
    pub fn from_secs(max_size: u64, expire_secs: u64) -> Self {
        Self::new(max_size, Duration::from_secs(expire_secs))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::from_secs(DEFAULT_CACHE_MAX_SIZE, DEFAULT_CACHE_EXPIRE_SECS)
    }
}
