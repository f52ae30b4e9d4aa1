//! Memoizing wrapper
//!
//! A memoized call is keyed by the [`Fingerprint`] of its arguments. While
//! the governing scope is active, a hit returns a clone of the stored value
//! without running the operation; a miss runs it and stores the value only if
//! it succeeded. While the scope is inactive the operation always runs and no
//! cache is created.

use crate::context::ScopedCaching;
use scoped_cache_domain::ports::BoundedCache;
use scoped_cache_domain::value_objects::{Fingerprint, ScopeName};
use scoped_cache_infrastructure::CacheHandle;
use std::convert::Infallible;
use std::future::Future;
use std::hash::Hash;
use tracing::{debug, trace, warn};

impl ScopedCaching {
    /// Memoize `op` in the cache `name`, governed by the scope of the same name
    ///
    /// Errors from `op` pass through and are never cached.
    pub fn memoize<A, V, E, F>(&self, name: &str, args: &A, op: F) -> Result<V, E>
    where
        A: Hash + ?Sized,
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<V, E>,
    {
        self.memoize_keyed(name, name, Fingerprint::of(args), op)
    }

    /// Memoize an infallible `op`
    pub fn memoize_value<A, V, F>(&self, name: &str, args: &A, op: F) -> V
    where
        A: Hash + ?Sized,
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> V,
    {
        let Ok(value) =
            self.memoize_keyed::<V, Infallible, _>(name, name, Fingerprint::of(args), || Ok(op()));
        value
    }

    /// Memoize the output of `fut`
    ///
    /// Scope activity is checked when the returned future is first polled.
    pub async fn memoize_async<A, V, E, Fut>(&self, name: &str, args: &A, fut: Fut) -> Result<V, E>
    where
        A: Hash + ?Sized,
        V: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>>,
    {
        self.memoize_keyed_async(name, name, Fingerprint::of(args), fut)
            .await
    }

    /// Memoizing wrapper for the cache `cache`
    ///
    /// The cache is governed by the scope of the same name unless
    /// [`Memoized::governed_by`] names another one.
    pub fn memoized(&self, cache: impl Into<ScopeName>) -> Memoized {
        let cache = cache.into();
        Memoized {
            caching: self.clone(),
            scope: cache.clone(),
            cache,
        }
    }

    fn cache_for<V>(&self, scope: &str, cache: &str) -> Option<CacheHandle<Fingerprint, V>>
    where
        V: Clone + Send + Sync + 'static,
    {
        if !self.registry.is_active(scope) {
            trace!(scope, cache, "Scope inactive, executing uncached");
            return None;
        }
        match self.store.get_or_create::<Fingerprint, V>(cache) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(scope, cache, error = %e, "Executing uncached");
                None
            }
        }
    }

    fn memoize_keyed<V, E, F>(
        &self,
        scope: &str,
        cache: &str,
        key: Fingerprint,
        op: F,
    ) -> Result<V, E>
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<V, E>,
    {
        let Some(handle) = self.cache_for::<V>(scope, cache) else {
            return op();
        };
        if let Some(hit) = handle.get_if_present(&key) {
            debug!(cache, %key, "Cache hit");
            return Ok(hit);
        }
        debug!(cache, %key, "Cache miss");
        let value = op()?;
        handle.put(key, value.clone());
        Ok(value)
    }

    async fn memoize_keyed_async<V, E, Fut>(
        &self,
        scope: &str,
        cache: &str,
        key: Fingerprint,
        fut: Fut,
    ) -> Result<V, E>
    where
        V: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>>,
    {
        let Some(handle) = self.cache_for::<V>(scope, cache) else {
            return fut.await;
        };
        if let Some(hit) = handle.get_if_present(&key) {
            debug!(cache, %key, "Cache hit");
            return Ok(hit);
        }
        debug!(cache, %key, "Cache miss");
        let value = fut.await?;
        handle.put(key, value.clone());
        Ok(value)
    }
}

/// Reusable memoizing wrapper bound to one cache name
///
/// # Example
///
/// ```
/// use scoped_cache::ScopedCaching;
///
/// let caching = ScopedCaching::default();
/// let lookup = caching.memoized("lookup").governed_by("batch");
///
/// caching.scoped("batch", || {
///     let first: Result<String, ()> = lookup.call(&(1, 2), || Ok("r1".to_string()));
///     let second: Result<String, ()> = lookup.call(&(1, 2), || Ok("other".to_string()));
///     assert_eq!(first, second);
/// });
/// ```
#[derive(Clone, Debug)]
pub struct Memoized {
    caching: ScopedCaching,
    cache: ScopeName,
    scope: ScopeName,
}

impl Memoized {
    /// Use `scope` as the governing scope instead of the cache's own name
    pub fn governed_by(mut self, scope: impl Into<ScopeName>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Cache name, also used for its configuration keys
    pub fn cache_name(&self) -> &ScopeName {
        &self.cache
    }

    /// Governing scope name
    pub fn scope_name(&self) -> &ScopeName {
        &self.scope
    }

    /// Memoize one call of `op` keyed by `args`
    pub fn call<A, V, E, F>(&self, args: &A, op: F) -> Result<V, E>
    where
        A: Hash + ?Sized,
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<V, E>,
    {
        let key = Fingerprint::of(args);
        self.caching
            .memoize_keyed(self.scope.as_str(), self.cache.as_str(), key, op)
    }

    /// Memoize one await of `fut` keyed by `args`
    pub async fn call_async<A, V, E, Fut>(&self, args: &A, fut: Fut) -> Result<V, E>
    where
        A: Hash + ?Sized,
        V: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = Fingerprint::of(args);
        self.caching
            .memoize_keyed_async(self.scope.as_str(), self.cache.as_str(), key, fut)
            .await
    }

    /// Wrap a fallible `op`, fingerprinting its argument on every call
    pub fn wrap<A, V, E, F>(self, op: F) -> impl Fn(A) -> Result<V, E>
    where
        A: Hash,
        V: Clone + Send + Sync + 'static,
        F: Fn(A) -> Result<V, E>,
    {
        move |args: A| {
            let key = Fingerprint::of(&args);
            self.caching
                .memoize_keyed(self.scope.as_str(), self.cache.as_str(), key, || op(args))
        }
    }

    /// Wrap an infallible `op`, fingerprinting its argument on every call
    pub fn wrap_infallible<A, V, F>(self, op: F) -> impl Fn(A) -> V
    where
        A: Hash,
        V: Clone + Send + Sync + 'static,
        F: Fn(A) -> V,
    {
        move |args: A| {
            let key = Fingerprint::of(&args);
            let Ok(value) = self.caching.memoize_keyed::<V, Infallible, _>(
                self.scope.as_str(),
                self.cache.as_str(),
                key,
                || Ok(op(args)),
            );
            value
        }
    }
}
