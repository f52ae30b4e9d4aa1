//! Configuration source implementations

use crate::error_ext::ErrorContext;
use figment::Figment;
use scoped_cache_domain::constants::{expire_key, max_size_key};
use scoped_cache_domain::error::Result;
use scoped_cache_domain::ports::ConfigSource;
use std::collections::HashMap;

/// Figment-backed configuration source
///
/// Keys are looked up by their dotted path, so `scoped.cache.lookup.max-size`
/// reads the `max-size` value of the `[scoped.cache.lookup]` TOML table.
/// Scope names containing `.` cannot be addressed this way.
#[derive(Debug, Clone)]
pub struct FigmentConfigSource {
    figment: Figment,
}

impl FigmentConfigSource {
    /// Wrap an already assembled figment
    pub fn new(figment: Figment) -> Self {
        Self { figment }
    }

    /// The underlying figment
    pub fn figment(&self) -> &Figment {
        &self.figment
    }
}

impl ConfigSource for FigmentConfigSource {
    fn get_optional_value(&self, key: &str) -> Result<Option<u64>> {
        match self.figment.find_value(key) {
            Ok(value) => value
                .deserialize::<u64>()
                .map(Some)
                .config_context(format!("Invalid value for '{key}'")),
            Err(e) if e.missing() => Ok(None),
            Err(e) => Err(e).config_context(format!("Failed to read '{key}'")),
        }
    }
}

/// In-memory configuration source
///
/// # Example
///
/// ```
/// use scoped_cache_domain::ConfigSource;
/// use scoped_cache_infrastructure::StaticConfigSource;
///
/// let source = StaticConfigSource::new().with_cache("lookup", 100, 5);
/// assert_eq!(
///     source.get_optional_value("scoped.cache.lookup.max-size").unwrap(),
///     Some(100)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    values: HashMap<String, u64>,
}

impl StaticConfigSource {
    /// Create an empty source; every lookup falls back to defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw key
    pub fn with_value<S: Into<String>>(mut self, key: S, value: u64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Set both bounds of a named cache
    pub fn with_cache(self, name: &str, max_size: u64, expire_secs: u64) -> Self {
        self.with_value(max_size_key(name), max_size)
            .with_value(expire_key(name), expire_secs)
    }
}

impl ConfigSource for StaticConfigSource {
    fn get_optional_value(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.values.get(key).copied())
    }
}
