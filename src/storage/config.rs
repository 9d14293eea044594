//! Engine configuration.
//!
//! Loaded from TOML; a missing file yields defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::contrast::cache::{DEFAULT_EVICTION_BATCH, DEFAULT_MAX_ENTRIES};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Configuration format version
    pub version: String,
    /// Cache settings
    pub cache: CacheSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache: CacheSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Check that the cache bounds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.max_entries == 0 {
            return Err(ConfigError::InvalidValue(
                "cache.max_entries must be at least 1".to_string(),
            ));
        }

        if self.cache.eviction_batch == 0 || self.cache.eviction_batch > self.cache.max_entries {
            return Err(ConfigError::InvalidValue(format!(
                "cache.eviction_batch must be between 1 and {}",
                self.cache.max_entries
            )));
        }

        Ok(())
    }
}

/// Cache-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of memoized results
    pub max_entries: usize,
    /// Entries dropped, oldest first, when the cache is full
    pub eviction_batch: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            eviction_batch: DEFAULT_EVICTION_BATCH,
        }
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "contrast-engine", "ContrastEngine")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file, falling back to defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: EngineConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file.
pub fn save_config_to(config: &EngineConfig, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
