//! Error handling types
//!
//! These errors describe failures of the caching machinery itself. Errors
//! raised by wrapped operations keep their own type and never pass through
//! this enum.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the scoped cache
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A named cache already exists with a different key/value shape
    #[error("Cache '{name}' was created with a different key/value type (requested {requested})")]
    CacheTypeMismatch {
        /// Name of the cache
        name: String,
        /// Type signature that was requested
        requested: String,
    },
}

impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cache type mismatch error
    pub fn cache_type_mismatch<N: Into<String>, R: Into<String>>(name: N, requested: R) -> Self {
        Self::CacheTypeMismatch {
            name: name.into(),
            requested: requested.into(),
        }
    }
}
