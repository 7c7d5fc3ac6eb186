/// Global argument storage and debug flag checks
///
/// The CLI itself is parsed with clap in main.rs. This module keeps a copy of the raw
/// argument list so the logger and other subsystems can check debug flags without
/// having the parsed arguments threaded through every call.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
#[cfg(test)]
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Provider API calls debug mode (covers goplus, honeypot and quickintel tags)
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Aggregation pipeline debug mode
pub fn is_debug_scanner_enabled() -> bool {
    has_arg("--debug-scanner")
}

/// Configuration loading debug mode
pub fn is_debug_config_enabled() -> bool {
    has_arg("--debug-config")
}
