//! # Scoped Cache Domain
//!
//! Core types shared by every layer of the scoped cache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Library error type and `Result` alias |
//! | [`constants`] | Default cache bounds and configuration key layout |
//! | [`ports`] | Contracts for configuration lookup and bounded caches |
//! | [`value_objects`] | Scope names, cache settings and argument fingerprints |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{BoundedCache, ConfigSource};
pub use value_objects::{CacheSettings, Fingerprint, ScopeName};
