//! Token security scanning
//!
//! - `token_info`: the shared report schema
//! - `normalize`: provider payload → `TokenInfo`
//! - `merge`: worst-case combination of three reports
//! - `provider`: the `ScanProvider` seam and the three adapter implementations
//! - `aggregator`: concurrent fan-out and merge

pub mod aggregator;
pub mod merge;
pub mod normalize;
pub mod provider;
pub mod token_info;

pub use aggregator::{MultiScanner, TokenScanner};
pub use merge::merge;
pub use normalize::{normalize_goplus, normalize_honeypot, normalize_quickintel, parse_bool};
pub use provider::{scan_normalized, ScanProvider};
pub use token_info::{TokenInfo, UnifiedTokenInfo};

use crate::config::get_config_clone;
use crate::logger::{self, LogTag};

/// Scan `token` with every configured provider and return the merged report
///
/// Uses the global configuration. Always returns a report; when the adapters
/// cannot be built the report is empty.
pub async fn multiscan(token: &str) -> UnifiedTokenInfo {
    let config = get_config_clone();
    match TokenScanner::from_config(&config.scanners) {
        Ok(scanner) => scanner.aggregate(token).await,
        Err(e) => {
            logger::error(LogTag::Scanner, &format!("Failed to build scanners: {}", e));
            UnifiedTokenInfo::default()
        }
    }
}
