/// QuickIntel audit API client
///
/// Endpoint implemented:
/// - POST /api/quicki/getquickiauditfull with `{"chain", "tokenAddress", "tier"}`
pub mod types;

pub use self::types::{
    QuickIntelAudit, QuickIntelDynamicDetails, QuickIntelRequest, QuickIntelResponse,
    QuickIntelTokenDetails, QuickIntelTokenHash,
};

use crate::apis::client::HttpClient;
use crate::config::QuickIntelConfig;
use crate::errors::{ApiError, ApiResult};
use crate::logger::LogTag;

pub struct QuickIntelClient {
    http_client: HttpClient,
    config: QuickIntelConfig,
}

impl QuickIntelClient {
    pub fn new(config: QuickIntelConfig, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            config,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn audit_url(&self) -> String {
        format!(
            "{}/quicki/getquickiauditfull",
            self.config.base_url.trim_end_matches('/')
        )
    }

    pub fn build_request(&self, token: &str) -> QuickIntelRequest {
        QuickIntelRequest {
            chain: self.config.chain.clone(),
            token_address: token.to_string(),
            tier: self.config.tier.clone(),
        }
    }

    /// Fetch the full audit for one token
    pub async fn scan(&self, token: &str) -> ApiResult<QuickIntelResponse> {
        if !self.is_enabled() {
            return Err(ApiError::Disabled);
        }

        let request = self.build_request(token);
        self.http_client
            .post_json(&self.audit_url(), &request, LogTag::QuickIntel)
            .await
    }
}
