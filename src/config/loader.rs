//! Configuration loading
//!
//! Handles loading configuration from the config file and environment and
//! applying them according to precedence rules.

use super::{
    defaults::{self, API_URL_ENV},
    paths,
    schema::Config,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    ///
    /// The `--api-url` flag is applied on top of this by the binary.
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Load configuration using `path` as the root config file
    ///
    /// A missing file means defaults; a file that exists but cannot be
    /// parsed is an error.
    pub fn load_from(path: &Path) -> Result<Config> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading it and checking its values
    ///
    /// Fails on invalid YAML, invalid value types, unreadable files, and a
    /// base URL that cannot serve as the API root.
    pub fn validate(path: &Path) -> Result<Config> {
        let config = Self::load_from(path).context("Failed to load configuration")?;
        Self::check(&config)?;
        Ok(config)
    }

    /// Check values that serde cannot check on its own
    pub fn check(config: &Config) -> Result<()> {
        crate::api::parse_base_url(&config.api.base_url).context("Invalid api.baseUrl")?;
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // CLIENTCARDS_API_URL override
        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.api.base_url = base_url;
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_missing_file_is_an_error_for_load_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load_file(&temp.path().join("config.yaml")).is_err());
    }

    #[test]
    fn test_save_then_load_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.api.base_url = "http://cards.internal:9000".to_string();
        config.ui.headless = true;
        ConfigLoader::save(&config, &path).unwrap();

        assert_eq!(ConfigLoader::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_check_rejects_relative_base_url() {
        let mut config = Config::default();
        config.api.base_url = "/api".to_string();
        assert!(ConfigLoader::check(&config).is_err());

        config.api.base_url = "https://cards.example.com/backend".to_string();
        assert!(ConfigLoader::check(&config).is_ok());
    }

    #[test]
    fn test_env_override() {
        // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
        // No other unit test in this crate reads CLIENTCARDS_API_URL.
        unsafe {
            std::env::set_var(API_URL_ENV, "http://override:1234");
        }

        let config = ConfigLoader::apply_env_overrides(Config::default());
        assert_eq!(config.api.base_url, "http://override:1234");

        // SAFETY: see above.
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }
    }
}
