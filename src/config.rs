// Configuration module for maptip
// Loads ~/.config/maptip/config.toml

mod types;

pub use types::{Config, DemoConfig, DisplayConfig, ScreenConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MaptipError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/maptip/config.toml
/// Returns default configuration if file doesn't exist or on read/parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks as
/// `load_config`
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(config_path) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(config_path: &Path) -> Result<Config, MaptipError> {
    let contents = fs::read_to_string(config_path).map_err(|source| MaptipError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    Ok(toml::from_str::<Config>(&contents)?)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/maptip/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("maptip")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
