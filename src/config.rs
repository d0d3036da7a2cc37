//! Configuration management for the GMW STAC generator
//!
//! Settings are read from an optional TOML file. Every field has a default,
//! so running without any configuration file produces the published metadata.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{ItemConfig, WriteOptions};
use crate::constants::{config, projection};
use crate::errors::{ConfigError, ConfigResult};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Item projection settings
    pub item: ItemConfigToml,
    /// Document output settings
    pub output: OutputConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// TOML-friendly item configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItemConfigToml {
    /// EPSG code of the tile grid
    pub epsg: u32,
    /// Pixel grid as [rows, cols]
    pub shape: [u32; 2],
}

impl Default for ItemConfigToml {
    fn default() -> Self {
        Self {
            epsg: projection::EPSG,
            shape: projection::ITEM_SHAPE,
        }
    }
}

/// TOML-friendly output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfigToml {
    /// Indent written JSON
    pub pretty: bool,
    /// Validate objects before writing
    pub validate: bool,
}

impl Default for OutputConfigToml {
    fn default() -> Self {
        Self {
            pretty: true,
            validate: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: config::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration:
    /// 1. Explicit config file (must exist)
    /// 2. First config file found in the standard locations
    /// 3. Default values
    pub fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) if path.exists() => Some(path),
            Some(path) => return Err(ConfigError::NotFound { path }),
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => Self {
                source: Some(path.clone()),
                ..Self::load_from_file(&path)?
            },
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![
            // Project-local config
            PathBuf::from(format!("./{}", config::LOCAL_CONFIG_FILE)),
            PathBuf::from("./config.toml"),
        ];
        // User config
        if let Some(path) = Self::get_default_config_path() {
            search_paths.push(path);
        }

        search_paths.into_iter().find(|path| path.exists())
    }

    /// Get the default config file path for the current user
    pub fn get_default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config::CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Reject values no tile grid or logger can use
    pub fn validate(&self) -> ConfigResult<()> {
        if self.item.epsg == 0 {
            return Err(ConfigError::InvalidValue {
                field: "item.epsg".to_string(),
                value: "0".to_string(),
                reason: "EPSG codes are positive integers".to_string(),
            });
        }

        if self.item.shape.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "item.shape".to_string(),
                value: format!("{:?}", self.item.shape),
                reason: "Both dimensions must be greater than 0".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Expected one of {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Log level to use when no verbosity flag overrides it
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .level
            .parse()
            .unwrap_or(tracing::Level::WARN)
    }
}

impl ItemConfigToml {
    /// Convert to runtime ItemConfig
    pub fn to_runtime_config(&self) -> ItemConfig {
        ItemConfig {
            epsg: self.epsg,
            shape: self.shape,
        }
    }
}

impl OutputConfigToml {
    /// Convert to runtime WriteOptions
    pub fn to_runtime_config(&self) -> WriteOptions {
        WriteOptions {
            pretty: self.pretty,
            validate: self.validate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.item.to_runtime_config(), ItemConfig::default());
        assert_eq!(config.output.to_runtime_config(), WriteOptions::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.source, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_loading_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        // Should fail when explicitly specified
        let result = AppConfig::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_config_loading_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let test_config = r#"
[item]
shape = [9000, 9000]

[logging]
level = "debug"
"#;
        std::fs::write(&config_path, test_config).unwrap();

        let config = AppConfig::load(Some(config_path.clone())).unwrap();

        // Verify custom values were loaded
        assert_eq!(config.source, Some(config_path));
        assert_eq!(config.item.shape, [9000, 9000]);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);

        // Verify defaults are still present for unspecified values
        assert_eq!(config.item.epsg, projection::EPSG);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        std::fs::write(&config_path, "[item]\nshape = [0, 4500]\n").unwrap();

        let result = AppConfig::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "[item\nepsg = ").unwrap();

        let result = AppConfig::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let content = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }
}
