//! Configuration system for clientcards
//!
//! A single YAML file with environment overrides. Keys use camelCase and dot
//! notation on the command line (e.g. `api.baseUrl`).

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ApiConfig, Config, UiConfig};

/// Configuration keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["api.baseUrl", "ui.enableMouse", "ui.headless"];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "api.baseUrl" => Ok(config.api.base_url.clone()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.headless" => Ok(config.ui.headless.to_string()),
        _ => Err(anyhow::anyhow!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            CONFIG_KEYS.join(", ")
        )),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "api.baseUrl" => {
            crate::api::parse_base_url(value).context("api.baseUrl must be an http(s) URL")?;
            config.api.base_url = value.to_string();
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.headless" => {
            config.ui.headless = value
                .parse()
                .context("ui.headless must be 'true' or 'false'")?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown configuration key: {} (known keys: {})",
                key,
                CONFIG_KEYS.join(", ")
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_round_trip() {
        let mut config = Config::default();
        set_config_value(&mut config, "api.baseUrl", "https://cards.example.com").unwrap();
        set_config_value(&mut config, "ui.headless", "true").unwrap();

        assert_eq!(
            get_config_value(&config, "api.baseUrl").unwrap(),
            "https://cards.example.com"
        );
        assert_eq!(get_config_value(&config, "ui.headless").unwrap(), "true");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "ui.enableMouse", "yes").is_err());
        assert!(set_config_value(&mut config, "api.baseUrl", "cards").is_err());
        assert!(set_config_value(&mut config, "readOnly", "true").is_err());
        assert_eq!(config, Config::default());
    }
}
