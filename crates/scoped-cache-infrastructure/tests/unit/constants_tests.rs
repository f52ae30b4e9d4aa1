//! Constants Tests

use scoped_cache_infrastructure::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL, LOG_FILTER_ENV,
};

#[test]
fn test_configuration_constants() {
    assert_eq!(DEFAULT_CONFIG_FILENAME, "scoped-cache.toml");
    assert_eq!(CONFIG_ENV_PREFIX, "SCOPED_CACHE");
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
}

#[test]
fn test_default_log_level_parses() {
    assert!(scoped_cache_infrastructure::logging::parse_log_level(DEFAULT_LOG_LEVEL).is_ok());
}
