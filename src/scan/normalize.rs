/// Provider response → TokenInfo mapping
///
/// Normalizers never fail. Missing fields and values that cannot be coerced
/// become the zero value of the target field.
use super::token_info::TokenInfo;
use crate::apis::goplus::GoPlusTokenSecurity;
use crate::apis::honeypot::HoneypotResponse;
use crate::apis::quickintel::QuickIntelResponse;
use crate::logger::{self, LogTag};

/// Coerce a string-encoded boolean
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`. Anything else,
/// including the empty string, is `false`.
pub fn parse_bool(value: &str) -> bool {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
        "0" | "f" | "F" | "FALSE" | "false" | "False" | "" => false,
        other => {
            logger::debug(
                LogTag::Scanner,
                &format!("Error parsing boolean value {:?}, using false", other),
            );
            false
        }
    }
}

fn flag(value: &Option<String>) -> bool {
    value.as_deref().map(parse_bool).unwrap_or(false)
}

/// GoPlus: identity and taxes verbatim, flags through `parse_bool`
pub fn normalize_goplus(report: GoPlusTokenSecurity) -> TokenInfo {
    TokenInfo {
        can_take_back_ownership: flag(&report.can_take_back_ownership),
        cannot_buy: flag(&report.cannot_buy),
        cannot_sell_all: flag(&report.cannot_sell_all),
        external_call: flag(&report.external_call),
        hidden_owner: flag(&report.hidden_owner),
        is_blacklisted: flag(&report.is_blacklisted),
        is_honeypot: flag(&report.is_honeypot),
        is_mintable: flag(&report.is_mintable),
        is_open_source: flag(&report.is_open_source),
        is_whitelisted: flag(&report.is_whitelisted),
        owner_change_balance: flag(&report.owner_change_balance),
        trading_cooldown: flag(&report.trading_cooldown),
        transfer_pausable: flag(&report.transfer_pausable),
        token_name: report.token_name.unwrap_or_default(),
        token_symbol: report.token_symbol.unwrap_or_default(),
        buy_tax: report.buy_tax.unwrap_or_default(),
        sell_tax: report.sell_tax.unwrap_or_default(),
        ..TokenInfo::default()
    }
}

/// Honeypot.is: identity, pair address and the simulation verdict
pub fn normalize_honeypot(response: HoneypotResponse) -> TokenInfo {
    let token = response.token.unwrap_or_default();

    // Flat `pair.address`, then nested `pair.pair.address`, then top-level `pairAddress`
    let pair = response.pair.unwrap_or_default();
    let uniswap_v2_pair = pair
        .address
        .filter(|a| !a.is_empty())
        .or_else(|| pair.pair.and_then(|p| p.address))
        .filter(|a| !a.is_empty())
        .or(response.pair_address)
        .unwrap_or_default();

    TokenInfo {
        token_name: token.name.unwrap_or_default(),
        token_symbol: token.symbol.unwrap_or_default(),
        decimals: token.decimals.unwrap_or_default(),
        uniswap_v2_pair,
        is_honeypot: response
            .honeypot_result
            .and_then(|r| r.is_honeypot)
            .unwrap_or(false),
        is_open_source: response
            .contract_code
            .and_then(|c| c.open_source)
            .unwrap_or(false),
        ..TokenInfo::default()
    }
}

/// QuickIntel: identity plus the audit's capability flags
///
/// `is_honeypot` is driven by the audit's hidden-owner finding, not by
/// `tokenDynamicDetails.is_Honeypot`.
pub fn normalize_quickintel(response: QuickIntelResponse) -> TokenInfo {
    let details = response.token_details.unwrap_or_default();
    let audit = response.quicki_audit.unwrap_or_default();

    TokenInfo {
        token_name: details.token_name.unwrap_or_default(),
        token_symbol: details.token_symbol.unwrap_or_default(),
        decimals: details.token_decimals.unwrap_or_default(),
        is_honeypot: audit.hidden_owner.unwrap_or(false),
        is_whitelisted: audit.can_whitelist.unwrap_or(false),
        is_mintable: audit.can_mint.unwrap_or(false),
        transfer_pausable: audit.can_pause_trading.unwrap_or(false),
        is_blacklisted: audit.can_blacklist.unwrap_or(false),
        external_call: audit.has_external_contract_risk.unwrap_or(false),
        trading_cooldown: audit.has_trading_cooldown.unwrap_or(false),
        personal_slippage_modifiable: false,
        ..TokenInfo::default()
    }
}
