//! Bounded Cache Port
//!
//! A capacity- and time-bounded key/value store. Eviction and expiration are
//! enforced by the implementation; callers only get, put and clear.

use crate::value_objects::CacheSettings;

/// Bounded key/value cache
///
/// Implementations must be safe to share between threads and must enforce
/// the [`CacheSettings`] they were built with.
pub trait BoundedCache<K, V>: Send + Sync {
    /// Get a value if it is present and not expired
    fn get_if_present(&self, key: &K) -> Option<V>;

    /// Insert or replace a value
    fn put(&self, key: K, value: V);

    /// Discard every entry
    fn clear(&self);

    /// Number of live entries
    fn entry_count(&self) -> u64;

    /// Bounds this cache enforces
    fn settings(&self) -> CacheSettings;
}
