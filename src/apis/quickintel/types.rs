/// QuickIntel audit API types
use crate::apis::lenient;
use serde::{Deserialize, Serialize};

/// Request body for the full audit endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickIntelRequest {
    pub chain: String,
    pub token_address: String,
    pub tier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickIntelResponse {
    #[serde(deserialize_with = "lenient::or_none")]
    pub token_details: Option<QuickIntelTokenDetails>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub token_dynamic_details: Option<QuickIntelDynamicDetails>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub quicki_audit: Option<QuickIntelAudit>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub project_verified: Option<bool>,
    pub kyc_verifications: Option<serde_json::Value>,
    pub external_audits: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickIntelTokenDetails {
    #[serde(deserialize_with = "lenient::string")]
    pub token_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token_symbol: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub token_decimals: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub token_logo: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token_owner: Option<String>,
    #[serde(deserialize_with = "lenient::float")]
    pub token_supply: Option<f64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub token_created_date: Option<i64>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub quicki_token_hash: Option<QuickIntelTokenHash>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickIntelTokenHash {
    #[serde(rename = "exact_qHash")]
    #[serde(deserialize_with = "lenient::string")]
    pub exact_q_hash: Option<String>,
    #[serde(rename = "similar_qHash")]
    #[serde(deserialize_with = "lenient::string")]
    pub similar_q_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickIntelDynamicDetails {
    #[serde(rename = "lastUpdatedTimestamp")]
    #[serde(deserialize_with = "lenient::integer")]
    pub last_updated_timestamp: Option<i64>,
    #[serde(rename = "is_Honeypot")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_honeypot: Option<bool>,
}

/// Static contract audit
///
/// Field names follow the API's `snake_With_Capitals` convention, so every
/// field carries an explicit rename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickIntelAudit {
    #[serde(rename = "contract_Creator")]
    #[serde(deserialize_with = "lenient::string")]
    pub contract_creator: Option<String>,
    #[serde(rename = "contract_Owner")]
    #[serde(deserialize_with = "lenient::string")]
    pub contract_owner: Option<String>,
    #[serde(rename = "contract_Name")]
    #[serde(deserialize_with = "lenient::string")]
    pub contract_name: Option<String>,
    #[serde(rename = "contract_Chain")]
    #[serde(deserialize_with = "lenient::string")]
    pub contract_chain: Option<String>,
    #[serde(rename = "contract_Address")]
    #[serde(deserialize_with = "lenient::string")]
    pub contract_address: Option<String>,
    #[serde(rename = "contract_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub contract_renounced: Option<bool>,

    #[serde(rename = "is_Launchpad_Contract")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_launchpad_contract: Option<bool>,
    #[serde(rename = "launchpad_Details")]
    pub launchpad_details: Option<serde_json::Value>,

    #[serde(rename = "hidden_Owner")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub hidden_owner: Option<bool>,
    #[serde(rename = "hidden_Owner_Modifiers")]
    pub hidden_owner_modifiers: Option<serde_json::Value>,
    #[serde(rename = "is_Proxy")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_proxy: Option<bool>,
    #[serde(rename = "proxy_Implementation")]
    #[serde(deserialize_with = "lenient::string")]
    pub proxy_implementation: Option<String>,

    #[serde(rename = "has_External_Contract_Risk")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_external_contract_risk: Option<bool>,
    #[serde(rename = "external_Contracts")]
    pub external_contracts: Option<serde_json::Value>,
    #[serde(rename = "has_Obfuscated_Address_Risk")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_obfuscated_address_risk: Option<bool>,
    #[serde(rename = "obfuscated_Address_List")]
    pub obfuscated_address_list: Option<serde_json::Value>,

    #[serde(rename = "can_Mint")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_mint: Option<bool>,
    #[serde(rename = "cant_Mint_Renounced")]
    pub cant_mint_renounced: Option<serde_json::Value>,
    #[serde(rename = "can_Burn")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_burn: Option<bool>,

    #[serde(rename = "can_Blacklist")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_blacklist: Option<bool>,
    #[serde(rename = "cant_Blacklist_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_blacklist_renounced: Option<bool>,
    #[serde(rename = "can_MultiBlacklist")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_multi_blacklist: Option<bool>,
    #[serde(rename = "can_Whitelist")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_whitelist: Option<bool>,
    #[serde(rename = "cant_Whitelist_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_whitelist_renounced: Option<bool>,

    #[serde(rename = "can_Update_Fees")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_update_fees: Option<bool>,
    #[serde(rename = "cant_Update_Fees_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_update_fees_renounced: Option<bool>,
    #[serde(rename = "can_Update_Max_Wallet")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_update_max_wallet: Option<bool>,
    #[serde(rename = "cant_Update_Max_Wallet_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_update_max_wallet_renounced: Option<bool>,
    #[serde(rename = "can_Update_Max_Tx")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_update_max_tx: Option<bool>,
    #[serde(rename = "cant_Update_Max_Tx_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_update_max_tx_renounced: Option<bool>,
    #[serde(rename = "can_Pause_Trading")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_pause_trading: Option<bool>,
    #[serde(rename = "cant_Pause_Trading_Renounced")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub cant_pause_trading_renounced: Option<bool>,
    #[serde(rename = "has_Trading_Cooldown")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_trading_cooldown: Option<bool>,
    #[serde(rename = "can_Update_Wallets")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub can_update_wallets: Option<bool>,

    #[serde(rename = "has_Suspicious_Functions")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_suspicious_functions: Option<bool>,
    #[serde(rename = "has_External_Functions")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_external_functions: Option<bool>,
    #[serde(rename = "has_Fee_Warning")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_fee_warning: Option<bool>,
    #[serde(rename = "has_ModifiedTransfer_Warning")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_modified_transfer_warning: Option<bool>,
    #[serde(rename = "modified_Transfer_Functions")]
    pub modified_transfer_functions: Option<serde_json::Value>,
    #[serde(rename = "suspicious_Functions")]
    pub suspicious_functions: Option<serde_json::Value>,
    #[serde(rename = "external_Functions")]
    #[serde(deserialize_with = "lenient::or_none")]
    pub external_functions: Option<Vec<String>>,
    #[serde(rename = "fee_Update_Functions")]
    #[serde(deserialize_with = "lenient::or_none")]
    pub fee_update_functions: Option<Vec<String>>,

    #[serde(rename = "has_Scams")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_scams: Option<bool>,
    #[serde(rename = "matched_Scams")]
    pub matched_scams: Option<serde_json::Value>,
    #[serde(rename = "scam_Functions")]
    pub scam_functions: Option<serde_json::Value>,
    #[serde(rename = "has_Known_Scam_Wallet_Funding")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_known_scam_wallet_funding: Option<bool>,
    #[serde(rename = "known_Scam_Wallet_Funding")]
    pub known_scam_wallet_funding: Option<serde_json::Value>,

    #[serde(rename = "contract_Links")]
    #[serde(deserialize_with = "lenient::or_none")]
    pub contract_links: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub functions: Option<Vec<String>>,
    #[serde(rename = "onlyOwner_Functions")]
    #[serde(deserialize_with = "lenient::or_none")]
    pub only_owner_functions: Option<Vec<String>>,
    #[serde(rename = "multiBlacklistFunctions")]
    pub multi_blacklist_functions: Option<serde_json::Value>,

    #[serde(rename = "has_General_Vulnerabilities")]
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_general_vulnerabilities: Option<bool>,
    #[serde(rename = "general_Vulnerabilities")]
    pub general_vulnerabilities: Option<serde_json::Value>,
}
