//! Configuration Loader Tests

use figment::Jail;
use scoped_cache_domain::ConfigSource;
use scoped_cache_infrastructure::ConfigLoader;
use scoped_cache_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_config_loader_defaults() {
    Jail::expect_with(|_| {
        let loaded = ConfigLoader::new()
            .with_env_prefix("SCOPED_CACHE_LOADER_DEFAULTS_TEST")
            .load()
            .unwrap();

        assert_eq!(loaded.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            loaded
                .source
                .get_optional_value("scoped.cache.lookup.max-size")
                .unwrap(),
            None
        );
        Ok(())
    });
}

#[test]
fn test_config_loader_reads_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("scoped-cache.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        r#"
[logging]
level = "debug"
json_format = true

[scoped.cache.lookup]
max-size = 64
expire-in-seconds-after-write = 90
"#
    )
    .unwrap();

    let loader = ConfigLoader::new().with_config_path(&config_path);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.json_format);
    assert_eq!(
        loaded
            .source
            .get_optional_value("scoped.cache.lookup.max-size")
            .unwrap(),
        Some(64)
    );
    assert_eq!(
        loaded
            .source
            .get_optional_value("scoped.cache.lookup.expire-in-seconds-after-write")
            .unwrap(),
        Some(90)
    );
}

#[test]
fn test_config_loader_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(loaded.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_config_loader_rejects_invalid_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("scoped-cache.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(result.is_err());
}

#[test]
fn test_config_loader_reads_cache_bounds_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("SCOPED_CACHE__LOOKUP__MAX_SIZE", 42);
        jail.set_env("SCOPED_CACHE__LOOKUP__EXPIRE_IN_SECONDS_AFTER_WRITE", 15);
        jail.set_env("SCOPED_CACHE__LOGGING__LEVEL", "warn");

        let loaded = ConfigLoader::new().load().unwrap();

        assert_eq!(
            loaded
                .source
                .get_optional_value("scoped.cache.lookup.max-size")
                .unwrap(),
            Some(42)
        );
        assert_eq!(
            loaded
                .source
                .get_optional_value("scoped.cache.lookup.expire-in-seconds-after-write")
                .unwrap(),
            Some(15)
        );
        assert_eq!(loaded.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_config_loader_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "scoped-cache.toml",
            "[scoped.cache.lookup]\nmax-size = 64\n",
        )?;
        jail.set_env("SCOPED_CACHE__LOOKUP__MAX_SIZE", 8);

        let loaded = ConfigLoader::new().load().unwrap();

        assert_eq!(
            loaded
                .source
                .get_optional_value("scoped.cache.lookup.max-size")
                .unwrap(),
            Some(8)
        );
        Ok(())
    });
}
