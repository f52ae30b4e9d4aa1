//! Scoped cache storage
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MokaBoundedCache`] | Bounded cache primitive backed by `moka::sync::Cache` |
//! | [`CacheStore`] | One lazily created cache per scope name, cleared all at once |

pub mod moka;
pub mod store;

pub use moka::MokaBoundedCache;
pub use store::{CacheHandle, CacheStore};
