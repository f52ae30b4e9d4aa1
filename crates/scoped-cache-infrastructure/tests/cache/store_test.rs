//! Cache Store Tests

use scoped_cache_domain::constants::MAX_CACHE_EXPIRE_SECS;
use scoped_cache_domain::error::{Error, Result};
use scoped_cache_domain::{BoundedCache, CacheSettings, ConfigSource, Fingerprint};
use scoped_cache_infrastructure::{CacheStore, StaticConfigSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

fn store_with(source: StaticConfigSource) -> CacheStore {
    CacheStore::new(Arc::new(source))
}

/// Counts lookups so tests can tell when configuration was re-read
#[derive(Debug, Default)]
struct CountingSource {
    lookups: AtomicUsize,
}

impl ConfigSource for CountingSource {
    fn get_optional_value(&self, _key: &str) -> Result<Option<u64>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

/// Fails every lookup
#[derive(Debug)]
struct BrokenSource;

impl ConfigSource for BrokenSource {
    fn get_optional_value(&self, key: &str) -> Result<Option<u64>> {
        Err(Error::configuration(format!("cannot read {key}")))
    }
}

#[test]
fn test_get_or_create_uses_defaults_when_unconfigured() {
    let store = store_with(StaticConfigSource::new());

    let cache = store.get_or_create::<Fingerprint, String>("lookup").unwrap();

    assert_eq!(cache.settings(), CacheSettings::default());
    assert!(store.contains("lookup"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_get_or_create_reads_configuration() {
    let store = store_with(StaticConfigSource::new().with_cache("lookup", 100, 5));

    let cache = store.get_or_create::<Fingerprint, String>("lookup").unwrap();

    assert_eq!(cache.settings(), CacheSettings::from_secs(100, 5));
}

#[test]
fn test_partial_configuration_falls_back_per_key() {
    let source = StaticConfigSource::new().with_value("scoped.cache.lookup.max-size", 42);
    let store = store_with(source);

    let cache = store.get_or_create::<u64, u64>("lookup").unwrap();

    assert_eq!(cache.settings().max_size, 42);
    assert_eq!(cache.settings().expire_after_write, Duration::from_secs(30));
}

#[test]
fn test_failed_lookup_falls_back_to_defaults() {
    let store = CacheStore::new(Arc::new(BrokenSource));

    let cache = store.get_or_create::<u64, u64>("lookup").unwrap();

    assert_eq!(cache.settings(), CacheSettings::default());
}

#[test]
fn test_out_of_range_expiration_falls_back_to_default() {
    let source = StaticConfigSource::new().with_cache("lookup", 10, 100_000_000_000);
    let store = store_with(source);

    let cache = store.get_or_create::<u64, u64>("lookup").unwrap();

    assert_eq!(cache.settings(), CacheSettings::default());
    cache.put(1, 1);
    assert_eq!(cache.get_if_present(&1), Some(1));
}

#[test]
fn test_longest_expiration_is_accepted() {
    let source = StaticConfigSource::new().with_cache("lookup", 10, MAX_CACHE_EXPIRE_SECS);
    let store = store_with(source);

    let cache = store.get_or_create::<u64, u64>("lookup").unwrap();

    assert_eq!(
        cache.settings().expire_after_write,
        Duration::from_secs(MAX_CACHE_EXPIRE_SECS)
    );
}

#[test]
fn test_keys_need_not_be_clone() {
    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Key(u64);

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct OtherKey(u64);

    let store = store_with(StaticConfigSource::new());

    let first = store.get_or_create::<Key, u64>("lookup").unwrap();
    let second = store.get_or_create::<Key, u64>("lookup").unwrap();
    first.put(Key(1), 10);

    assert_eq!(second.get_if_present(&Key(1)), Some(10));
    assert!(store.get_or_create::<OtherKey, u64>("lookup").is_err());
}

#[test]
fn test_get_or_create_returns_same_instance() {
    let store = store_with(StaticConfigSource::new());

    let first = store.get_or_create::<u64, String>("lookup").unwrap();
    let second = store.get_or_create::<u64, String>("lookup").unwrap();

    first.put(1, "shared".to_string());
    assert_eq!(second.get_if_present(&1), Some("shared".to_string()));
}

#[test]
fn test_configuration_read_once_per_creation() {
    let source = Arc::new(CountingSource::default());
    let store = CacheStore::new(source.clone());

    store.get_or_create::<u64, u64>("lookup").unwrap();
    store.get_or_create::<u64, u64>("lookup").unwrap();
    assert_eq!(source.lookups.load(Ordering::SeqCst), 2);

    store.clear_all();
    store.get_or_create::<u64, u64>("lookup").unwrap();
    assert_eq!(source.lookups.load(Ordering::SeqCst), 4);
}

#[test]
fn test_type_mismatch_is_reported() {
    let store = store_with(StaticConfigSource::new());
    store.get_or_create::<u64, String>("lookup").unwrap();

    let result = store.get_or_create::<u64, u32>("lookup");

    assert!(matches!(result, Err(Error::CacheTypeMismatch { ref name, .. }) if name == "lookup"));
}

#[test]
fn test_clear_all_discards_every_cache() {
    let store = store_with(StaticConfigSource::new());
    let lookup = store.get_or_create::<u64, String>("lookup").unwrap();
    let other = store.get_or_create::<u64, u64>("other").unwrap();
    lookup.put(1, "a".to_string());
    other.put(2, 2);

    store.clear_all();

    assert!(store.is_empty());
    assert_eq!(lookup.get_if_present(&1), None);
    assert_eq!(other.get_if_present(&2), None);

    let fresh = store.get_or_create::<u64, String>("lookup").unwrap();
    assert_eq!(fresh.get_if_present(&1), None);
}

#[test]
fn test_clear_all_allows_new_types_for_a_name() {
    let store = store_with(StaticConfigSource::new());
    store.get_or_create::<u64, String>("lookup").unwrap();

    store.clear_all();

    assert!(store.get_or_create::<u64, u32>("lookup").is_ok());
}

#[test]
fn test_cache_names_and_entry_count() {
    let store = store_with(StaticConfigSource::new());
    let b = store.get_or_create::<u64, u64>("b").unwrap();
    store.get_or_create::<u64, u64>("a").unwrap();
    b.put(1, 1);

    let names: Vec<String> = store
        .cache_names()
        .into_iter()
        .map(|n| n.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(store.entry_count("b"), Some(1));
    assert_eq!(store.entry_count("missing"), None);
}

#[test]
fn test_concurrent_first_calls_create_one_instance() {
    const THREADS: usize = 16;
    let source = Arc::new(CountingSource::default());
    let store = CacheStore::new(source.clone());
    let barrier = Barrier::new(THREADS);

    let handles: Vec<_> = std::thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    store.get_or_create::<u64, usize>("shared").unwrap()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    // Exactly one creation means exactly one pair of configuration lookups
    assert_eq!(source.lookups.load(Ordering::SeqCst), 2);
    assert_eq!(store.len(), 1);

    handles[0].put(99, 99);
    for handle in &handles {
        assert_eq!(handle.get_if_present(&99), Some(99));
    }
}
