/// GoPlus token security API response types
///
/// GoPlus encodes almost every flag as a string ("0"/"1"), and any field may be
/// missing or null depending on chain and token age.
use crate::apis::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response envelope: `code == 1` means success
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoPlusResponse {
    pub code: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub message: Option<String>,
    /// Keyed by contract address (lowercase)
    #[serde(deserialize_with = "lenient::or_none")]
    pub result: Option<HashMap<String, GoPlusTokenSecurity>>,
}

/// Security report for one contract address
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoPlusTokenSecurity {
    // Identity
    #[serde(deserialize_with = "lenient::string")]
    pub token_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token_symbol: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub total_supply: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub holder_count: Option<String>,

    // Ownership
    #[serde(deserialize_with = "lenient::string")]
    pub creator_address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub creator_balance: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub creator_percent: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub owner_address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub owner_balance: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub owner_percent: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub owner_change_balance: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub can_take_back_ownership: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub hidden_owner: Option<String>,

    // Contract
    #[serde(deserialize_with = "lenient::string")]
    pub is_open_source: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub is_proxy: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub is_mintable: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub external_call: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub selfdestruct: Option<String>,

    // Trading
    #[serde(deserialize_with = "lenient::string")]
    pub buy_tax: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub sell_tax: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub cannot_buy: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub cannot_sell_all: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub is_honeypot: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub honeypot_with_same_creator: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub transfer_pausable: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub trading_cooldown: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub is_anti_whale: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub anti_whale_modifiable: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub slippage_modifiable: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub personal_slippage_modifiable: Option<String>,

    // Lists
    #[serde(deserialize_with = "lenient::string")]
    pub is_blacklisted: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub is_whitelisted: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub trust_list: Option<String>,

    // Markets
    #[serde(deserialize_with = "lenient::string")]
    pub is_in_dex: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub dex: Option<Vec<GoPlusDex>>,
    #[serde(deserialize_with = "lenient::string")]
    pub lp_holder_count: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub lp_total_supply: Option<String>,

    #[serde(deserialize_with = "lenient::or_none")]
    pub holders: Option<Vec<GoPlusHolder>>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub lp_holders: Option<Vec<GoPlusHolder>>,

    #[serde(deserialize_with = "lenient::string")]
    pub note: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub other_potential_risks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoPlusDex {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub liquidity: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub pair: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoPlusHolder {
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub tag: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub is_contract: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub balance: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub percent: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub is_locked: Option<i64>,
}
