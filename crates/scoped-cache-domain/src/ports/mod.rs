//! Domain Port Interfaces
//!
//! Contracts the caching engine consumes from the outside world. The
//! infrastructure layer provides the implementations:
//!
//! - **config** - key/value lookup supplying per-cache bounds
//! - **cache** - capacity- and time-bounded key/value store

/// Bounded cache port
pub mod cache;
/// Configuration lookup port
pub mod config;

pub use cache::BoundedCache;
pub use config::ConfigSource;
