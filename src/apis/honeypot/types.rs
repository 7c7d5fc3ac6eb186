/// Honeypot.is API response types
use crate::apis::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotResponse {
    #[serde(deserialize_with = "lenient::or_none")]
    pub token: Option<HoneypotToken>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub with_token: Option<HoneypotToken>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub summary: Option<HoneypotSummary>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub simulation_success: Option<bool>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub simulation_result: Option<HoneypotSimulation>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub honeypot_result: Option<HoneypotResult>,
    /// Holder statistics; shape varies between chains so it is kept as raw JSON
    pub holder_analysis: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub flags: Option<Vec<serde_json::Value>>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub contract_code: Option<HoneypotContractCode>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub chain: Option<HoneypotChain>,
    #[serde(deserialize_with = "lenient::string")]
    pub router: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub pair: Option<HoneypotPair>,
    #[serde(deserialize_with = "lenient::string")]
    pub pair_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotToken {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub decimals: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_holders: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotSummary {
    #[serde(deserialize_with = "lenient::string")]
    pub risk: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub risk_level: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotSimulation {
    #[serde(deserialize_with = "lenient::float")]
    pub buy_tax: Option<f64>,
    #[serde(deserialize_with = "lenient::float")]
    pub sell_tax: Option<f64>,
    #[serde(deserialize_with = "lenient::float")]
    pub transfer_tax: Option<f64>,
    pub buy_gas: Option<serde_json::Value>,
    pub sell_gas: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotResult {
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_honeypot: Option<bool>,
    #[serde(deserialize_with = "lenient::string")]
    pub honeypot_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotContractCode {
    #[serde(deserialize_with = "lenient::boolean")]
    pub open_source: Option<bool>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub root_open_source: Option<bool>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_proxy: Option<bool>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_proxy_calls: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotChain {
    pub id: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub short_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub currency: Option<String>,
}

/// Liquidity pair information
///
/// Pair name and address appear either directly on this object or nested under
/// `pair`, depending on the API revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotPair {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub pair: Option<HoneypotPairIdentity>,
    #[serde(deserialize_with = "lenient::string")]
    pub token0: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token1: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::string")]
    pub pair_type: Option<String>,
    pub chain_id: Option<serde_json::Value>,
    // Numbers or numeric strings depending on the pair type
    pub reserves0: Option<serde_json::Value>,
    pub reserves1: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::float")]
    pub liquidity: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub router: Option<String>,
    pub created_at_timestamp: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::string")]
    pub creation_tx_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoneypotPairIdentity {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token0: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token1: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::string")]
    pub pair_type: Option<String>,
}
