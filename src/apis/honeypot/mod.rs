/// Honeypot.is API client
///
/// API Documentation: https://docs.honeypot.is/
///
/// Endpoint implemented:
/// - GET /v2/IsHoneypot?address={address}&chainID={chain_id}
pub mod types;

pub use self::types::{
    HoneypotChain, HoneypotContractCode, HoneypotPair, HoneypotPairIdentity, HoneypotResponse,
    HoneypotResult, HoneypotSimulation, HoneypotSummary, HoneypotToken,
};

use crate::apis::client::HttpClient;
use crate::config::HoneypotConfig;
use crate::errors::{ApiError, ApiResult};
use crate::logger::LogTag;

pub struct HoneypotClient {
    http_client: HttpClient,
    config: HoneypotConfig,
}

impl HoneypotClient {
    pub fn new(config: HoneypotConfig, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            config,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn is_honeypot_url(&self, token: &str) -> String {
        format!(
            "{}/IsHoneypot?address={}&chainID={}",
            self.config.base_url.trim_end_matches('/'),
            token,
            self.config.chain_id
        )
    }

    /// Run the honeypot simulation for one token
    pub async fn scan(&self, token: &str) -> ApiResult<HoneypotResponse> {
        if !self.is_enabled() {
            return Err(ApiError::Disabled);
        }

        let url = self.is_honeypot_url(token);
        self.http_client.get_json(&url, LogTag::Honeypot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = HoneypotClient::new(HoneypotConfig::default(), 0).unwrap();
        assert_eq!(
            client.is_honeypot_url("0xabc"),
            "https://api.honeypot.is/v2/IsHoneypot?address=0xabc&chainID=1"
        );
    }

    #[tokio::test]
    async fn test_disabled_client_skips_request() {
        let config = HoneypotConfig {
            enabled: false,
            ..HoneypotConfig::default()
        };
        let client = HoneypotClient::new(config, 0).unwrap();
        assert_eq!(client.scan("0xabc").await.unwrap_err(), ApiError::Disabled);
    }
}
