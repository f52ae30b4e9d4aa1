//! Infrastructure layer constants
//!
//! Cache bound defaults and configuration key layout are defined in
//! `scoped_cache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "scoped-cache.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SCOPED_CACHE";

/// Separator between segments of an environment variable name
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration section holding the logging settings
pub const LOGGING_CONFIG_SECTION: &str = "logging";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SCOPED_CACHE_LOG";

/// File stem used for rolling log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "scoped-cache";
