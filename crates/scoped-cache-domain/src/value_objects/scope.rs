//! Scope name

use std::borrow::Borrow;
use std::fmt;

/// Name of a logical unit of work
///
/// Names are opaque and flat: `"batch"` and `"batch.inner"` are unrelated.
/// Equality is an exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeName(String);

impl ScopeName {
    /// Create a scope name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScopeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `ScopeName` be queried with a plain `&str`.
impl Borrow<str> for ScopeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScopeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ScopeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for ScopeName {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

impl From<&ScopeName> for ScopeName {
    fn from(name: &ScopeName) -> Self {
        name.clone()
    }
}
