//! # Scoped Cache
//!
//! Scoped memoization: results of expensive operations are cached only while
//! an enclosing named scope is active, and every scoped cache is flushed the
//! moment a scope exits.
//!
//! ## Example
//!
//! ```
//! use scoped_cache::ScopedCaching;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let caching = ScopedCaching::default();
//! let calls = AtomicUsize::new(0);
//! let add = caching.memoized("lookup").governed_by("batch").wrap_infallible(|(a, b): (u32, u32)| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     a + b
//! });
//!
//! let total = caching.scoped("batch", || add((1, 2)) + add((1, 2)));
//! assert_eq!(total, 6);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//!
//! // Outside the scope nothing is cached
//! add((1, 2));
//! assert_eq!(calls.load(Ordering::SeqCst), 2);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, ports and value objects
//! - `infrastructure` - scope registry, cache store, configuration, logging
//! - this crate - the [`ScopedCaching`] context and the two wrappers built on it

mod boundary;
mod context;
mod memoize;

pub use boundary::{ScopeBoundary, ScopeGuard};
pub use context::{ScopedCaching, ScopedCachingBuilder};
pub use memoize::Memoized;

/// Domain layer - errors, ports and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use scoped_cache_domain::*;
}

/// Infrastructure layer - registry, cache store, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use scoped_cache_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use scoped_cache_domain::{
    BoundedCache, CacheSettings, ConfigSource, Error, Fingerprint, Result, ScopeName,
};
pub use scoped_cache_infrastructure::logging::init_logging;
pub use scoped_cache_infrastructure::{
    CacheStore, ConfigLoader, FigmentConfigSource, LoadedConfig, ScopeRegistry,
    StaticConfigSource,
};
