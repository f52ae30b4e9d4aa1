//! Scope-boundary wrapper
//!
//! Entering a scope marks its name active. Leaving it, on every exit path,
//! deactivates the name and then clears every cache in the store, not only
//! the one sharing the scope's name.

use crate::context::ScopedCaching;
use scoped_cache_domain::value_objects::ScopeName;
use scoped_cache_infrastructure::{CacheStore, ScopeRegistry};
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Open activation of a scope
///
/// Dropping the guard closes the scope, so cleanup runs on normal return,
/// on `?` early return, on panic unwinding and when an async task holding
/// the guard is cancelled.
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct ScopeGuard {
    name: ScopeName,
    registry: Arc<ScopeRegistry>,
    store: Arc<CacheStore>,
}

impl ScopeGuard {
    /// Name of the scope this guard keeps open
    pub fn name(&self) -> &ScopeName {
        &self.name
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // Deactivate before clearing, never the reverse
        self.registry.deactivate(self.name.as_str());
        self.store.clear_all();
        debug!(scope = %self.name, "Scope exited, scoped caches cleared");
    }
}

impl std::fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard").field("name", &self.name).finish()
    }
}

impl ScopedCaching {
    /// Activate `name` until the returned guard is dropped
    pub fn enter_scope(&self, name: impl Into<ScopeName>) -> ScopeGuard {
        let name = name.into();
        self.registry.activate(name.as_str());
        ScopeGuard {
            name,
            registry: Arc::clone(&self.registry),
            store: Arc::clone(&self.store),
        }
    }

    /// Run `op` inside the scope `name`
    ///
    /// The return value (including an `Err`) passes through unchanged after
    /// the scope has been closed.
    pub fn scoped<R>(&self, name: impl Into<ScopeName>, op: impl FnOnce() -> R) -> R {
        let _guard = self.enter_scope(name);
        op()
    }

    /// Await `fut` inside the scope `name`
    ///
    /// The scope opens on first poll and closes when the future completes or
    /// is dropped.
    pub async fn scoped_async<F: Future>(&self, name: impl Into<ScopeName>, fut: F) -> F::Output {
        let _guard = self.enter_scope(name);
        fut.await
    }

    /// Scope-boundary wrapper for `name`
    pub fn boundary(&self, name: impl Into<ScopeName>) -> ScopeBoundary {
        ScopeBoundary {
            caching: self.clone(),
            name: name.into(),
        }
    }
}

/// Reusable scope-boundary wrapper bound to one scope name
///
/// # Example
///
/// ```
/// use scoped_cache::ScopedCaching;
///
/// let caching = ScopedCaching::default();
/// let checker = caching.clone();
/// let job = caching
///     .boundary("batch")
///     .wrap(move |n: u32| checker.is_scope_active("batch").then_some(n));
///
/// assert_eq!(job(3), Some(3));
/// assert!(!caching.is_scope_active("batch"));
/// ```
#[derive(Clone, Debug)]
pub struct ScopeBoundary {
    caching: ScopedCaching,
    name: ScopeName,
}

impl ScopeBoundary {
    /// Scope name
    pub fn name(&self) -> &ScopeName {
        &self.name
    }

    /// Run `op` inside the scope
    pub fn run<R>(&self, op: impl FnOnce() -> R) -> R {
        self.caching.scoped(&self.name, op)
    }

    /// Await `fut` inside the scope
    pub async fn run_async<F: Future>(&self, fut: F) -> F::Output {
        self.caching.scoped_async(&self.name, fut).await
    }

    /// Wrap `op` so every call runs inside the scope
    pub fn wrap<A, R, F>(self, op: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        move |args| self.run(|| op(args))
    }
}
