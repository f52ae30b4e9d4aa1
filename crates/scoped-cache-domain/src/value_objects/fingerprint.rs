//! Argument fingerprints
//!
//! A fingerprint is the cache key of a memoized call. It is computed from the
//! call's arguments with [`std::hash::Hash`], so tuples, slices and nested
//! vectors contribute every element in order. The hasher is seeded with fixed
//! keys, which makes fingerprints stable across threads, runs and processes.
//!
//! Distinct arguments can collide. A collision makes two calls share one
//! cache entry; this is accepted and not detected.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Deterministic hash of a call's argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint an argument list
    ///
    /// Pass the arguments as a tuple (or any other `Hash` value):
    ///
    /// ```
    /// use scoped_cache_domain::Fingerprint;
    ///
    /// assert_eq!(Fingerprint::of(&(1, 2)), Fingerprint::of(&(1, 2)));
    /// assert_ne!(Fingerprint::of(&(1, 2)), Fingerprint::of(&(2, 1)));
    /// ```
    pub fn of<A: Hash + ?Sized>(args: &A) -> Self {
        let mut hasher = seahash::SeaHasher::new();
        args.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw hash value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
