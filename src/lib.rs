//! tokenscan: multi-provider token security scanner
//!
//! Queries GoPlus, Honeypot.is and QuickIntel for one token, normalizes every
//! report to `scan::TokenInfo` and merges them so that any provider raising a
//! risk flag raises it in the unified report.

pub mod apis;
pub mod arguments;
pub mod config;
pub mod errors;
pub mod logger;
pub mod scan;
