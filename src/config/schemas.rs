/// Configuration schemas - every config structure defined once with defaults
///
/// Defaults reproduce the endpoints and chain identifiers the scanners have always used,
/// so running without a config file scans Ethereum mainnet.
use crate::config_struct;

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration loaded from TOML
    pub struct Config {
        scanners: ScannersConfig = ScannersConfig::default(),
    }
}

config_struct! {
    /// Provider adapters used by multiscan and the single-provider modes
    pub struct ScannersConfig {
        /// Per-request timeout in seconds for every provider, 0 = transport default (none)
        request_timeout_secs: u64 = 0,
        goplus: GoPlusConfig = GoPlusConfig::default(),
        honeypot: HoneypotConfig = HoneypotConfig::default(),
        quickintel: QuickIntelConfig = QuickIntelConfig::default(),
    }
}

// ============================================================================
// PROVIDER CONFIGURATION
// ============================================================================

config_struct! {
    /// GoPlus token security API
    pub struct GoPlusConfig {
        enabled: bool = true,
        base_url: String = "https://api.gopluslabs.io/api/v1".to_string(),
        chain_id: String = "1".to_string(),
    }
}

config_struct! {
    /// Honeypot.is simulation API
    pub struct HoneypotConfig {
        enabled: bool = true,
        base_url: String = "https://api.honeypot.is/v2".to_string(),
        chain_id: String = "1".to_string(),
    }
}

config_struct! {
    /// QuickIntel audit API
    pub struct QuickIntelConfig {
        enabled: bool = true,
        base_url: String = "https://app.quickintel.io/api".to_string(),
        chain: String = "eth".to_string(),
        tier: String = "basic".to_string(),
    }
}
