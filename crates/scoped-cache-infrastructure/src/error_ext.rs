//! Error extension utilities
//!
//! Converts foreign configuration errors into the domain
//! [`Error`](scoped_cache_domain::Error).

use scoped_cache_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use scoped_cache_infrastructure::error_ext::ErrorContext;
///
/// let settings: LoggingConfig = figment
///     .extract_inner("logging")
///     .config_context("Invalid logging section")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
