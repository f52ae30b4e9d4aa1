//! Moka bounded cache
//!
//! Concurrent in-memory cache bounded by entry count and expire-after-write.
//!
//! ## Example
//!
//! ```
//! use scoped_cache_domain::{BoundedCache, CacheSettings};
//! use scoped_cache_infrastructure::MokaBoundedCache;
//!
//! let cache: MokaBoundedCache<u64, String> =
//!     MokaBoundedCache::new(CacheSettings::from_secs(100, 60));
//! cache.put(1, "one".to_string());
//! assert_eq!(cache.get_if_present(&1), Some("one".to_string()));
//! ```

use moka::sync::Cache;
use scoped_cache_domain::ports::BoundedCache;
use scoped_cache_domain::value_objects::CacheSettings;
use std::hash::Hash;

/// Moka-based bounded cache
///
/// Clones share the same underlying storage.
pub struct MokaBoundedCache<K, V> {
    cache: Cache<K, V>,
    settings: CacheSettings,
}

// Cloning the handle must not require `K: Clone`
impl<K, V> Clone for MokaBoundedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            settings: self.settings,
        }
    }
}

impl<K, V> MokaBoundedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache enforcing `settings`
    ///
    /// Moka's time-to-live starts at insertion and restarts on update, which
    /// is expire-after-write.
    pub fn new(settings: CacheSettings) -> Self {
        let cache = Cache::builder()
            .max_capacity(settings.max_size)
            .time_to_live(settings.expire_after_write)
            .build();

        Self { cache, settings }
    }
}

impl<K, V> BoundedCache<K, V> for MokaBoundedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get_if_present(&self, key: &K) -> Option<V> {
        self.cache.get(key)
    }

    fn put(&self, key: K, value: V) {
        self.cache.insert(key, value);
    }

    fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    fn entry_count(&self) -> u64 {
        // Pending maintenance would otherwise leave the count stale
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    fn settings(&self) -> CacheSettings {
        self.settings
    }
}

impl<K, V> std::fmt::Debug for MokaBoundedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaBoundedCache")
            .field("max_size", &self.settings.max_size)
            .field("expire_after_write", &self.settings.expire_after_write)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
