//! Scope registry
//!
//! Process-wide set of active scope names, shared by every wrapper through an
//! `Arc`. Each name carries an activation depth: overlapping scopes with the
//! same name (nested or on other threads) keep it active until the last of
//! them exits.

use dashmap::DashMap;
use scoped_cache_domain::value_objects::ScopeName;
use tracing::debug;

/// Set of currently active scope names
///
/// All mutations go through the map's per-key locking, so concurrent
/// activations and deactivations of one name never lose an update.
#[derive(Debug, Default)]
pub struct ScopeRegistry {
    active: DashMap<ScopeName, usize>,
}

impl ScopeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` active, returning its new depth
    pub fn activate(&self, name: &str) -> usize {
        let depth = {
            let mut depth = self.active.entry(ScopeName::from(name)).or_insert(0);
            *depth += 1;
            *depth
        };
        debug!(scope = name, depth, "Scope activated");
        depth
    }

    /// Leave one activation of `name`, returning the remaining depth
    ///
    /// The name becomes inactive when its depth reaches zero. Deactivating an
    /// inactive name does nothing.
    pub fn deactivate(&self, name: &str) -> usize {
        let mut remaining = 0;
        self.active.remove_if_mut(name, |_, depth| {
            *depth = depth.saturating_sub(1);
            remaining = *depth;
            remaining == 0
        });
        debug!(scope = name, depth = remaining, "Scope deactivated");
        remaining
    }

    /// Whether `name` is currently active
    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Number of open activations of `name`
    pub fn depth(&self, name: &str) -> usize {
        self.active.get(name).map(|depth| *depth).unwrap_or(0)
    }

    /// Names of all active scopes, sorted
    pub fn active_scopes(&self) -> Vec<ScopeName> {
        let mut names: Vec<ScopeName> = self.active.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Whether no scope is active
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
