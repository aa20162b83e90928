//! Default configuration values
//!
//! Provides default configuration instances and helper functions.

use super::schema::Config;

/// Environment variable overriding `api.baseUrl`
pub const API_URL_ENV: &str = "CLIENTCARDS_API_URL";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CLIENTCARDS_CONFIG_DIR";

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }
}
