//! Cache store
//!
//! Owns one bounded cache per scope name. Caches are created lazily on first
//! use, reading their bounds from the injected
//! [`ConfigSource`](scoped_cache_domain::ConfigSource), and are discarded all
//! at once by [`CacheStore::clear_all`].
//!
//! Caches of different key/value types share one map, so entries are stored
//! type-erased and downcast on the way out.

use crate::cache::MokaBoundedCache;
use dashmap::DashMap;
use downcast_rs::{DowncastSync, impl_downcast};
use scoped_cache_domain::constants::{MAX_CACHE_EXPIRE_SECS, expire_key, max_size_key};
use scoped_cache_domain::error::{Error, Result};
use scoped_cache_domain::ports::{BoundedCache, ConfigSource};
use scoped_cache_domain::value_objects::{CacheSettings, ScopeName};
use std::any::type_name;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Handle to a named cache returned by [`CacheStore::get_or_create`]
///
/// Handles are cheap clones sharing the store's instance.
pub type CacheHandle<K, V> = MokaBoundedCache<K, V>;

/// Type-erased view of a stored cache
trait ManagedCache: DowncastSync {
    fn clear(&self);

    fn entry_count(&self) -> u64;
}
impl_downcast!(sync ManagedCache);

impl<K, V> ManagedCache for MokaBoundedCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn clear(&self) {
        BoundedCache::clear(self);
    }

    fn entry_count(&self) -> u64 {
        BoundedCache::entry_count(self)
    }
}

/// Mapping from scope name to its bounded cache
///
/// At most one cache exists per name. Concurrent first calls for the same
/// name all receive the same instance.
pub struct CacheStore {
    caches: DashMap<ScopeName, Arc<dyn ManagedCache>>,
    config: Arc<dyn ConfigSource>,
}

impl CacheStore {
    /// Create an empty store reading cache bounds from `config`
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self {
            caches: DashMap::new(),
            config,
        }
    }

    /// Get the cache for `name`, creating it on first use
    ///
    /// `K` and `V` fix the handle's key and value types. A name must always be
    /// requested with the same types.
    ///
    /// # Errors
    /// [`Error::CacheTypeMismatch`] when `name` already holds a cache of other
    /// key/value types.
    pub fn get_or_create<K, V>(&self, name: &str) -> Result<CacheHandle<K, V>>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if let Some(existing) = self.caches.get(name) {
            return downcast_handle(name, existing.value());
        }

        // Settings are only read in the vacant branch, under the shard lock
        let entry = self
            .caches
            .entry(ScopeName::from(name))
            .or_insert_with(|| {
                let settings = self.resolve_settings(name);
                debug!(
                    cache = name,
                    max_size = settings.max_size,
                    expire_after_write = ?settings.expire_after_write,
                    "Created scoped cache"
                );
                Arc::new(MokaBoundedCache::<K, V>::new(settings)) as Arc<dyn ManagedCache>
            });
        downcast_handle(name, entry.value())
    }

    /// Discard every managed cache
    ///
    /// Each cache is emptied before it is dropped, so callers still holding an
    /// old handle observe no entries. The next [`get_or_create`] for any name
    /// re-reads configuration and builds a fresh cache.
    ///
    /// [`get_or_create`]: Self::get_or_create
    pub fn clear_all(&self) {
        let mut cleared = 0usize;
        self.caches.retain(|_, cache| {
            cache.clear();
            cleared += 1;
            false
        });
        trace!(caches = cleared, "Cleared all scoped caches");
    }

    /// Whether a cache currently exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.caches.contains_key(name)
    }

    /// Number of caches currently held
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    /// Whether the store holds no caches
    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }

    /// Names of the caches currently held, sorted
    pub fn cache_names(&self) -> Vec<ScopeName> {
        let mut names: Vec<ScopeName> = self.caches.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of live entries in the cache for `name`, if it exists
    pub fn entry_count(&self, name: &str) -> Option<u64> {
        self.caches.get(name).map(|cache| cache.entry_count())
    }

    fn resolve_settings(&self, name: &str) -> CacheSettings {
        let defaults = CacheSettings::default();
        let max_size = self
            .lookup(&max_size_key(name))
            .unwrap_or(defaults.max_size);
        let expire_after_write = self
            .lookup(&expire_key(name))
            .filter(|&secs| {
                let accepted = secs <= MAX_CACHE_EXPIRE_SECS;
                if !accepted {
                    warn!(
                        cache = name,
                        secs,
                        max = MAX_CACHE_EXPIRE_SECS,
                        "Using default for out-of-range expiration"
                    );
                }
                accepted
            })
            .map(Duration::from_secs)
            .unwrap_or(defaults.expire_after_write);
        CacheSettings::new(max_size, expire_after_write)
    }

    fn lookup(&self, key: &str) -> Option<u64> {
        match self.config.get_optional_value(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Using default for unreadable cache setting");
                None
            }
        }
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("caches", &self.cache_names())
            .field("config", &self.config)
            .finish()
    }
}

fn downcast_handle<K, V>(name: &str, cache: &Arc<dyn ManagedCache>) -> Result<CacheHandle<K, V>>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    cache
        .as_ref()
        .downcast_ref::<MokaBoundedCache<K, V>>()
        .cloned()
        .ok_or_else(|| {
            Error::cache_type_mismatch(
                name,
                format!("{} -> {}", type_name::<K>(), type_name::<V>()),
            )
        })
}
