/// Provider abstraction used by the aggregator
///
/// A provider fetches its raw report and knows how to map it to a `TokenInfo`.
/// `scan_normalized` is the only entry point the aggregator uses: a failed
/// provider is logged and contributes an all-zero report.
use super::normalize::{normalize_goplus, normalize_honeypot, normalize_quickintel};
use super::token_info::TokenInfo;
use crate::apis::goplus::GoPlusTokenSecurity;
use crate::apis::honeypot::HoneypotResponse;
use crate::apis::quickintel::QuickIntelResponse;
use crate::apis::{GoPlusClient, HoneypotClient, QuickIntelClient};
use crate::errors::{ApiError, ApiResult};
use crate::logger::{self, LogTag};
use async_trait::async_trait;

#[async_trait]
pub trait ScanProvider: Send + Sync + 'static {
    /// Raw provider payload
    type Response: Send + 'static;

    /// Display name used in logs and error messages
    fn name(&self) -> &str;

    fn tag(&self) -> LogTag {
        LogTag::Scanner
    }

    /// Fetch the raw report for `token`
    async fn scan(&self, token: &str) -> ApiResult<Self::Response>;

    /// Map the raw report to the shared schema
    fn normalize(&self, response: Self::Response) -> TokenInfo;
}

/// Scan and normalize, substituting an empty report on failure
pub async fn scan_normalized<P>(provider: &P, token: &str) -> TokenInfo
where
    P: ScanProvider + ?Sized,
{
    match provider.scan(token).await {
        Ok(response) => {
            let info = provider.normalize(response);
            logger::debug(
                provider.tag(),
                &format!(
                    "{} report for {}: {} risk flags raised",
                    provider.name(),
                    token,
                    info.risk_flag_count()
                ),
            );
            info
        }
        Err(ApiError::Disabled) => {
            logger::debug(
                provider.tag(),
                &format!("{} disabled, using empty report", provider.name()),
            );
            TokenInfo::default()
        }
        Err(e) => {
            logger::warning(
                provider.tag(),
                &format!(
                    "Error occurred during {} scan: {}, using empty report",
                    provider.name(),
                    e
                ),
            );
            TokenInfo::default()
        }
    }
}

#[async_trait]
impl ScanProvider for GoPlusClient {
    type Response = GoPlusTokenSecurity;

    fn name(&self) -> &str {
        "goplus"
    }

    fn tag(&self) -> LogTag {
        LogTag::GoPlus
    }

    async fn scan(&self, token: &str) -> ApiResult<Self::Response> {
        GoPlusClient::scan(self, token).await
    }

    fn normalize(&self, response: Self::Response) -> TokenInfo {
        normalize_goplus(response)
    }
}

#[async_trait]
impl ScanProvider for HoneypotClient {
    type Response = HoneypotResponse;

    fn name(&self) -> &str {
        "ishoneypot"
    }

    fn tag(&self) -> LogTag {
        LogTag::Honeypot
    }

    async fn scan(&self, token: &str) -> ApiResult<Self::Response> {
        HoneypotClient::scan(self, token).await
    }

    fn normalize(&self, response: Self::Response) -> TokenInfo {
        normalize_honeypot(response)
    }
}

#[async_trait]
impl ScanProvider for QuickIntelClient {
    type Response = QuickIntelResponse;

    fn name(&self) -> &str {
        "quickIntel"
    }

    fn tag(&self) -> LogTag {
        LogTag::QuickIntel
    }

    async fn scan(&self, token: &str) -> ApiResult<Self::Response> {
        QuickIntelClient::scan(self, token).await
    }

    fn normalize(&self, response: Self::Response) -> TokenInfo {
        normalize_quickintel(response)
    }
}
