//! Cross-platform directory path resolution
//!
//! `CLIENTCARDS_CONFIG_DIR` wins when set. Otherwise:
//! - Linux/macOS: XDG Base Directory specification (`$XDG_CONFIG_HOME`, else ~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use super::defaults::CONFIG_DIR_ENV;
use std::path::{Path, PathBuf};

/// Get the configuration directory path
///
/// Checks CLIENTCARDS_CONFIG_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/clientcards or ~/.config/clientcards
/// - Windows: %APPDATA%\clientcards\config
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "clientcards")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("clientcards"))
            }
            #[cfg(not(windows))]
            {
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("clientcards")
            }
        })
}

/// Get the root configuration file path
pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
