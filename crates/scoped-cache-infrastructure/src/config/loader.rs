//! Configuration loader
//!
//! Merges configuration from defaults, a TOML file and environment variables
//! with Figment.
//!
//! Environment variables address cache bounds as
//! `SCOPED_CACHE__<NAME>__MAX_SIZE` and
//! `SCOPED_CACHE__<NAME>__EXPIRE_IN_SECONDS_AFTER_WRITE`. The env provider
//! lower-cases variable names, so only lower-case scope names can be
//! configured from the environment.

use crate::config::{FigmentConfigSource, LoggingConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::Uncased;
use scoped_cache_domain::constants::{EXPIRE_KEY_SUFFIX, MAX_SIZE_KEY_SUFFIX, cache_setting_key};
use scoped_cache_domain::error::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of loading configuration
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Source answering per-cache bound lookups
    pub source: Arc<FigmentConfigSource>,

    /// Logging section
    pub logging: LoggingConfig,
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default logging section
    /// 2. TOML configuration file (explicit path, else `./scoped-cache.toml`)
    /// 3. Environment variables with the configured prefix
    pub fn load(&self) -> Result<LoadedConfig> {
        let mut figment = Figment::new().merge(Serialized::default(
            LOGGING_CONFIG_SECTION,
            LoggingConfig::default(),
        ));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment
            .merge(Env::prefixed(&prefix).map(|key| Uncased::new(map_env_key(key.as_str()))));

        let logging: LoggingConfig = figment
            .extract_inner(LOGGING_CONFIG_SECTION)
            .config_context("Invalid logging configuration")?;
        crate::logging::parse_log_level(&logging.level)?;

        Ok(LoadedConfig {
            source: Arc::new(FigmentConfigSource::new(figment)),
            logging,
        })
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let path = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        path.exists().then_some(path)
    }
}

/// Translate an environment variable name (prefix stripped) into a dotted
/// configuration path
///
/// `lookup__max_size` becomes `scoped.cache.lookup.max-size`; any other name
/// has its `__` separators turned into `.` (`logging__level` becomes
/// `logging.level`).
pub(crate) fn map_env_key(key: &str) -> String {
    if let Some((name, setting)) = key.rsplit_once(CONFIG_ENV_SEPARATOR) {
        let setting = setting.to_lowercase().replace('_', "-");
        if setting == MAX_SIZE_KEY_SUFFIX || setting == EXPIRE_KEY_SUFFIX {
            return cache_setting_key(name, &setting);
        }
    }
    key.replace(CONFIG_ENV_SEPARATOR, ".")
}
