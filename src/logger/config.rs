/// Logger configuration derived from command-line flags
///
/// Recognized flags:
/// - `--debug-<tag>`: enable DEBUG output for one tag (`--debug-api` also covers providers)
/// - `--verbose`: enable DEBUG and VERBOSE output for every tag
/// - `--quiet`: only errors
/// - `--no-color`: plain output
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub debug_tags: HashSet<String>,
    pub use_colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            use_colors: true,
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from a raw argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for arg in args {
            match arg.as_str() {
                "--verbose" => config.min_level = LogLevel::Verbose,
                "--quiet" => config.min_level = LogLevel::Error,
                "--no-color" => config.use_colors = false,
                _ => {
                    if let Some(tag) = arg.strip_prefix("--debug-") {
                        config.debug_tags.insert(tag.to_lowercase());
                    }
                }
            }
        }

        // Per-tag debug output still has to pass the level threshold
        if config.min_level == LogLevel::Info && !config.debug_tags.is_empty() {
            config.min_level = LogLevel::Debug;
        }

        config
    }

    pub fn is_debug_enabled(&self, tag: &LogTag) -> bool {
        self.min_level == LogLevel::Verbose
            || self.debug_tags.contains(&tag.to_debug_key())
            || (tag.is_provider() && self.debug_tags.contains("api"))
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the active logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Initialize the logger configuration from the global command-line arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&get_cmd_args()));
}
