//! Scope tracking

pub mod registry;

pub use registry::ScopeRegistry;
