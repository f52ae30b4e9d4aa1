//! Configuration Source Port
//!
//! The caching engine never loads configuration itself. It asks an injected
//! [`ConfigSource`] for the bounds of a cache the first time that cache is
//! created.

use crate::error::Result;

/// Key/value configuration lookup
///
/// Keys follow the layout in [`crate::constants`], for example
/// `scoped.cache.lookup.max-size`.
///
/// # Example
///
/// ```ignore
/// use scoped_cache_domain::constants::max_size_key;
///
/// let max_size = source.get_optional_value(&max_size_key("lookup"))?.unwrap_or(10);
/// ```
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    /// Look up an unsigned integer setting
    ///
    /// # Returns
    /// `Ok(None)` when the key is absent, `Err` when a value exists but
    /// cannot be read as an unsigned integer.
    fn get_optional_value(&self, key: &str) -> Result<Option<u64>>;
}
