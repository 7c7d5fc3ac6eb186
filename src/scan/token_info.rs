/// Shared token report produced by every normalizer and by the merge
///
/// Every field has a zero value (empty string, 0, false) that stands for
/// "unknown". A provider that did not report a flag and a provider that
/// reported it as false produce the same value.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    // Identity
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token_symbol: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub decimals: i64,
    #[serde(rename = "uniswapv2_pair", skip_serializing_if = "String::is_empty")]
    pub uniswap_v2_pair: String,

    // Risk flags
    #[serde(skip_serializing_if = "is_false")]
    pub is_honeypot: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_open_source: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_whitelisted: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub can_take_back_ownership: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub owner_change_balance: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cannot_buy: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cannot_sell_all: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_mintable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden_owner: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub transfer_pausable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_blacklisted: bool,

    // Taxes, as reported (e.g. "0.05")
    #[serde(skip_serializing_if = "String::is_empty")]
    pub buy_tax: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sell_tax: String,

    #[serde(skip_serializing_if = "is_false")]
    pub external_call: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub trading_cooldown: bool,
    /// Not populated by any provider
    #[serde(skip_serializing_if = "is_false")]
    pub personal_slippage_modifiable: bool,
}

/// Result of merging the three provider reports; same shape as a single report
pub type UnifiedTokenInfo = TokenInfo;

impl TokenInfo {
    /// Compact JSON rendering
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("error marshaling TokenInfo to JSON: {}", e))
    }

    /// True when no field carries information
    pub fn is_empty(&self) -> bool {
        *self == TokenInfo::default()
    }

    /// Number of risk flags set (open source is not a risk)
    pub fn risk_flag_count(&self) -> usize {
        [
            self.is_honeypot,
            self.is_whitelisted,
            self.can_take_back_ownership,
            self.owner_change_balance,
            self.cannot_buy,
            self.cannot_sell_all,
            self.is_mintable,
            self.hidden_owner,
            self.transfer_pausable,
            self.is_blacklisted,
            self.external_call,
            self.trading_cooldown,
            self.personal_slippage_modifiable,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
