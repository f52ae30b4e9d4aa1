//! Shared scoped caching context

use scoped_cache_domain::ports::ConfigSource;
use scoped_cache_infrastructure::{CacheStore, LoadedConfig, ScopeRegistry, StaticConfigSource};
use std::sync::Arc;

/// Scope registry and cache store shared by every wrapper
///
/// Build one at start-up and hand clones to callers; clones share state.
/// Scope-boundary and memoizing wrappers built from different contexts do not
/// see each other.
#[derive(Clone, Debug)]
pub struct ScopedCaching {
    pub(crate) registry: Arc<ScopeRegistry>,
    pub(crate) store: Arc<CacheStore>,
}

impl ScopedCaching {
    /// Create a context reading cache bounds from `config`
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self::from_parts(
            Arc::new(ScopeRegistry::new()),
            Arc::new(CacheStore::new(config)),
        )
    }

    /// Assemble a context from existing components
    pub fn from_parts(registry: Arc<ScopeRegistry>, store: Arc<CacheStore>) -> Self {
        Self { registry, store }
    }

    /// Start building a context
    pub fn builder() -> ScopedCachingBuilder {
        ScopedCachingBuilder::default()
    }

    /// The scope registry
    pub fn registry(&self) -> &Arc<ScopeRegistry> {
        &self.registry
    }

    /// The cache store
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    /// Whether the scope `name` is currently active
    pub fn is_scope_active(&self, name: &str) -> bool {
        self.registry.is_active(name)
    }
}

impl Default for ScopedCaching {
    /// Context with no configuration; every cache uses the default bounds
    fn default() -> Self {
        Self::new(Arc::new(StaticConfigSource::new()))
    }
}

/// Builder for [`ScopedCaching`]
#[derive(Debug, Default)]
pub struct ScopedCachingBuilder {
    config: Option<Arc<dyn ConfigSource>>,
}

impl ScopedCachingBuilder {
    /// Read cache bounds from `config`
    pub fn with_config_source(mut self, config: Arc<dyn ConfigSource>) -> Self {
        self.config = Some(config);
        self
    }

    /// Read cache bounds from a loaded configuration
    pub fn with_loaded_config(self, loaded: &LoadedConfig) -> Self {
        self.with_config_source(loaded.source.clone())
    }

    /// Build the context
    pub fn build(self) -> ScopedCaching {
        let config = self
            .config
            .unwrap_or_else(|| Arc::new(StaticConfigSource::new()));
        ScopedCaching::new(config)
    }
}
