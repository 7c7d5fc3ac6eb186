/// Core logging implementation with automatic filtering
///
/// This module decides whether a message is shown and hands it to
/// the format module for rendering.
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Check against minimum log level threshold
/// 3. Debug level requires --debug-<tag> (or --verbose)
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return config.is_debug_enabled(tag);
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message, config.use_colors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_pass_quiet() {
        let config = LoggerConfig {
            min_level: LogLevel::Error,
            ..LoggerConfig::default()
        };
        assert!(should_log(&config, &LogTag::Scanner, LogLevel::Error));
        assert!(!should_log(&config, &LogTag::Scanner, LogLevel::Warning));
    }

    #[test]
    fn test_debug_requires_tag_flag() {
        let mut config = LoggerConfig {
            min_level: LogLevel::Debug,
            ..LoggerConfig::default()
        };
        config.debug_tags.insert("scanner".to_string());

        assert!(should_log(&config, &LogTag::Scanner, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Merge, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Scanner, LogLevel::Verbose));
    }

    #[test]
    fn test_verbose_shows_everything() {
        let config = LoggerConfig {
            min_level: LogLevel::Verbose,
            ..LoggerConfig::default()
        };
        assert!(should_log(&config, &LogTag::Merge, LogLevel::Debug));
        assert!(should_log(&config, &LogTag::GoPlus, LogLevel::Verbose));
        assert!(should_log(&config, &LogTag::System, LogLevel::Info));
    }
}
