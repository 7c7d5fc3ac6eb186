/// GoPlus token security API client
///
/// API Documentation: https://docs.gopluslabs.io/
///
/// Endpoint implemented:
/// - GET /api/v1/token_security/{chain_id}?contract_addresses={address}
pub mod types;

pub use self::types::{GoPlusDex, GoPlusHolder, GoPlusResponse, GoPlusTokenSecurity};

use crate::apis::client::HttpClient;
use crate::config::GoPlusConfig;
use crate::errors::{ApiError, ApiResult};
use crate::logger::{self, LogTag};

/// Envelope code GoPlus uses for a successful call
pub const SUCCESS_CODE: i64 = 1;

pub struct GoPlusClient {
    http_client: HttpClient,
    config: GoPlusConfig,
}

impl GoPlusClient {
    pub fn new(config: GoPlusConfig, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            config,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn token_security_url(&self, token: &str) -> String {
        format!(
            "{}/token_security/{}?contract_addresses={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.chain_id,
            token
        )
    }

    /// Fetch the security report for one token
    ///
    /// Fails on transport errors, a non-success envelope code, or an envelope that
    /// does not contain the requested address.
    pub async fn scan(&self, token: &str) -> ApiResult<GoPlusTokenSecurity> {
        if !self.is_enabled() {
            return Err(ApiError::Disabled);
        }

        let url = self.token_security_url(token);
        let response: GoPlusResponse = self.http_client.get_json(&url, LogTag::GoPlus).await?;

        if response.code != SUCCESS_CODE {
            return Err(ApiError::Provider(response.message.unwrap_or_default()));
        }

        let report = extract_report(response, token);
        if report.is_none() {
            logger::debug(
                LogTag::GoPlus,
                &format!("No token_security entry for {}", token),
            );
        }
        report.ok_or(ApiError::NotFound)
    }
}

/// Pick the entry for `token` out of the result map
///
/// Exact key first, then a case-insensitive match since GoPlus keys results by
/// lowercase address.
fn extract_report(response: GoPlusResponse, token: &str) -> Option<GoPlusTokenSecurity> {
    let mut results = response.result?;
    if let Some(report) = results.remove(token) {
        return Some(report);
    }

    let key = results
        .keys()
        .find(|key| key.eq_ignore_ascii_case(token))?
        .clone();
    results.remove(&key)
}
