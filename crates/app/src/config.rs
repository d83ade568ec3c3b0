//! Console configuration
//!
//! Loaded from `resort.toml` in the platform config directory, or from the
//! path in `RESORT_CONFIG`. A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RESORT_CONFIG";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// How amounts are shown to the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for money amounts (e.g. "Rs.")
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "Rs.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `RESORT_CONFIG` if set, else from the platform config directory
    pub fn load() -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration directly from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "resort", "resort").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("resort.toml"))
    }

    /// Format an amount with the configured currency prefix
    pub fn format_money(&self, amount: u64) -> String {
        format!("{}{}", self.display.currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.display.currency, "Rs.");
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.format_money(24000), "Rs.24000");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[display]
currency = "USD "
"#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.format_money(8000), "USD 8000");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp.path().join("resort.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resort.toml");
        fs::write(
            &path,
            r#"
[display]
currency = "INR "

[logging]
filter = "resort_core=debug"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.display.currency, "INR ");
        assert_eq!(config.logging.filter, "resort_core=debug");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resort.toml");
        fs::write(&path, "[display\ncurrency = ").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
