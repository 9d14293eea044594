//! Integration tests for configuration loading.

use contrast_engine::storage::config::{load_config_from, save_config_to, ConfigError};
use contrast_engine::{ContrastCalculator, EngineConfig};
use tempfile::TempDir;

#[test]
fn test_calculator_from_saved_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = EngineConfig::default();
    config.cache.max_entries = 64;
    config.cache.eviction_batch = 8;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    let calc = ContrastCalculator::with_config(&loaded);
    assert_eq!(calc.cache_stats().max_size, 64);
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = EngineConfig::default();
    config.cache.max_entries = 0;

    let err = save_config_to(&config, &path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue(_)));
    assert!(!path.exists());
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.cache.max_entries, 1000);
    assert_eq!(config.cache.eviction_batch, 100);
}
