//! Configuration module for the muncht CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the muncht application.

use dirs::{config_dir, home_dir};
use munch_lex::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{MunchtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "muncht.toml";

/// Application configuration structure.
///
/// Every table is optional; a missing `[vocabulary]` list falls back to the
/// built-in keywords or operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scan settings for `lex` and `check`.
    #[serde(default)]
    pub lex: LexConfig,

    /// Keywords and operators.
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

/// Scan settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Number of files scanned in parallel; the CPU count of the running
    /// machine when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/muncht/`)
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MunchtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            MunchtError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MunchtError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no command can run with.
    pub fn validate(&self) -> Result<()> {
        if self.lex.jobs == Some(0) {
            return Err(MunchtError::Config(
                "lex.jobs must be at least 1".to_string(),
            ));
        }
        self.vocabulary.validate()?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("muncht").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("muncht").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            lex: LexConfig {
                format: OutputFormat::Json,
                jobs: Some(2),
            },
            vocabulary: Vocabulary::new(["when", "then"], ["=>", "+"]),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.lex.format, OutputFormat::Text);
        assert_eq!(config.lex.jobs, None);
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[vocabulary]\nkeywords = [\"when\"]\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.vocabulary.keywords, vec!["when"]);
        assert_eq!(
            config.vocabulary.operators,
            Vocabulary::default().operators
        );
        assert_eq!(config.lex.format, OutputFormat::Text);
    }

    #[test]
    fn test_default_config_does_not_pin_jobs() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        Config::default().save_to_path(&config_path).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(!content.contains("jobs"));
        assert_eq!(Config::load_from_path(&config_path).unwrap().lex.jobs, None);
    }

    #[test]
    fn test_invalid_vocabulary_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[vocabulary]\noperators = [\"a+\"]\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MunchtError::Vocabulary(_))));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lex]\njobs = 0\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MunchtError::Config(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lex]\nformat = \"xml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MunchtError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/muncht.toml"));
        assert!(result.is_err());
    }
}
