//! Structured logging for tokenscan
//!
//! Provides a small tagged logging API:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Colored output on stderr so stdout stays reserved for the JSON report
//!
//! ## Usage
//!
//! ```rust
//! use tokenscan::logger::{self, LogTag};
//!
//! logger::warning(LogTag::GoPlus, "scan failed, using empty report");
//! logger::info(LogTag::Scanner, "multiscan finished");
//! logger::debug(LogTag::Merge, "merged 3 reports"); // Only if --debug-merge
//! logger::verbose(LogTag::Honeypot, "raw body: ..."); // Only if --verbose
//! ```
//!
//! Call `logger::init()` once at startup, after the global argument list is in place.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::LoggerConfig;
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line flags
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (hidden by --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching --debug-<tag> flag is present.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (--verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
