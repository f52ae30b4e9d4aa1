//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ScopeName`] | Opaque name of a logical unit of work |
//! | [`CacheSettings`] | Capacity and expire-after-write bounds of one cache |
//! | [`Fingerprint`] | Deterministic hash of a call's arguments |

/// Cache bound value objects
pub mod settings;
/// Argument fingerprint value objects
pub mod fingerprint;
/// Scope identity value objects
pub mod scope;

pub use fingerprint::Fingerprint;
pub use scope::ScopeName;
pub use settings::CacheSettings;
