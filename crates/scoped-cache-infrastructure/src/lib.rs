//! # Infrastructure Layer
//!
//! Shared state and technical concerns behind scoped memoization.
//!
//! ### Scoped caching
//! | Module | Description |
//! |--------|-------------|
//! | [`scope`] | Registry of currently active scope names |
//! | [`cache`] | Moka-backed bounded caches and the per-name cache store |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Configuration sources (figment, in-memory) and loader |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Infrastructure constants |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod scope;

// Re-export commonly used types
pub use cache::{CacheHandle, CacheStore, MokaBoundedCache};
pub use config::{ConfigLoader, FigmentConfigSource, LoadedConfig, StaticConfigSource};
pub use error_ext::ErrorContext;
pub use scope::ScopeRegistry;
