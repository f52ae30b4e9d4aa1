//! Configuration
//!
//! Per-cache bounds are read through the domain
//! [`ConfigSource`](scoped_cache_domain::ConfigSource) port. Two sources are
//! provided:
//!
//! - [`FigmentConfigSource`] - TOML file and environment variables via figment
//! - [`StaticConfigSource`] - in-memory values, for tests and embedding hosts
//!
//! [`ConfigLoader`] assembles the figment source together with the logging
//! section.

pub mod loader;
pub mod logging;
pub mod sources;

pub use loader::{ConfigLoader, LoadedConfig};
pub use logging::LoggingConfig;
pub use sources::{FigmentConfigSource, StaticConfigSource};
