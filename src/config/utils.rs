use super::schemas::Config;
/// Configuration utilities - loading and access helpers
///
/// - Loading configuration from a TOML file
/// - Thread-safe access to the global configuration
use crate::arguments::is_debug_config_enabled;
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

/// Global configuration instance
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "tokenscan.toml";

/// Parse configuration from TOML text
///
/// Every key is optional; missing keys keep their defaults.
pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str::<Config>(contents).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Read configuration from a file, falling back to defaults when it does not exist
pub fn read_config_file(path: &str) -> Result<Config, String> {
    if !Path::new(path).exists() {
        logger::debug(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

    parse_config(&contents).map_err(|e| format!("{} ('{}')", e, path))
}

/// Load configuration from a specific file path into the global CONFIG
///
/// A second call replaces the active configuration.
pub fn load_config_from_path(path: &str) -> Result<(), String> {
    let config = read_config_file(path)?;

    if is_debug_config_enabled() {
        match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                logger::debug(LogTag::Config, &format!("Effective configuration:\n{}", rendered))
            }
            Err(e) => logger::debug(
                LogTag::Config,
                &format!("Failed to render effective configuration: {}", e),
            ),
        }
    }

    match CONFIG.get() {
        Some(lock) => {
            let mut current = lock
                .write()
                .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
            *current = config;
        }
        None => {
            // Lost a race with another initializer; that value wins
            let _ = CONFIG.set(RwLock::new(config));
        }
    }

    Ok(())
}

/// Execute a function with read access to the configuration
///
/// Uses default values when no configuration has been loaded.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => match lock.read() {
            Ok(config) => f(&config),
            Err(poisoned) => f(&poisoned.into_inner()),
        },
        None => f(&Config::default()),
    }
}

/// Get a clone of the entire configuration
///
/// Useful when the values have to be held across await points.
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}
