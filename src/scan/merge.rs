/// Worst-case merge of three provider reports
///
/// Per field:
/// - flags: logical OR, any provider raising a flag raises it in the result
/// - decimals: maximum
/// - text: the longest value by character count; on equal length the earlier argument wins
/// - `personal_slippage_modifiable`: always false
use super::token_info::{TokenInfo, UnifiedTokenInfo};

fn worst_bool(a: bool, b: bool, c: bool) -> bool {
    a || b || c
}

fn worst_int(a: i64, b: i64, c: i64) -> i64 {
    a.max(b).max(c)
}

/// Longest string wins; only a strictly longer value replaces the current pick
fn worst_string<'a>(a: &'a str, b: &'a str, c: &'a str) -> &'a str {
    let mut longest = a;
    let mut longest_len = a.chars().count();
    for candidate in [b, c] {
        let len = candidate.chars().count();
        if len > longest_len {
            longest = candidate;
            longest_len = len;
        }
    }
    longest
}

/// Combine three reports into one, keeping the most alarming value of every field
pub fn merge(a: &TokenInfo, b: &TokenInfo, c: &TokenInfo) -> UnifiedTokenInfo {
    let text = |f: fn(&TokenInfo) -> &str| worst_string(f(a), f(b), f(c)).to_string();
    let flag = |f: fn(&TokenInfo) -> bool| worst_bool(f(a), f(b), f(c));

    TokenInfo {
        token_name: text(|t| t.token_name.as_str()),
        token_symbol: text(|t| t.token_symbol.as_str()),
        decimals: worst_int(a.decimals, b.decimals, c.decimals),
        uniswap_v2_pair: text(|t| t.uniswap_v2_pair.as_str()),
        is_honeypot: flag(|t| t.is_honeypot),
        is_open_source: flag(|t| t.is_open_source),
        is_whitelisted: flag(|t| t.is_whitelisted),
        can_take_back_ownership: flag(|t| t.can_take_back_ownership),
        owner_change_balance: flag(|t| t.owner_change_balance),
        cannot_buy: flag(|t| t.cannot_buy),
        cannot_sell_all: flag(|t| t.cannot_sell_all),
        is_mintable: flag(|t| t.is_mintable),
        hidden_owner: flag(|t| t.hidden_owner),
        transfer_pausable: flag(|t| t.transfer_pausable),
        is_blacklisted: flag(|t| t.is_blacklisted),
        buy_tax: text(|t| t.buy_tax.as_str()),
        sell_tax: text(|t| t.sell_tax.as_str()),
        external_call: flag(|t| t.external_call),
        trading_cooldown: flag(|t| t.trading_cooldown),
        personal_slippage_modifiable: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_honeypot(value: bool) -> TokenInfo {
        TokenInfo {
            is_honeypot: value,
            ..TokenInfo::default()
        }
    }

    fn with_name(name: &str) -> TokenInfo {
        TokenInfo {
            token_name: name.to_string(),
            ..TokenInfo::default()
        }
    }

    fn with_decimals(decimals: i64) -> TokenInfo {
        TokenInfo {
            decimals,
            ..TokenInfo::default()
        }
    }

    fn sample() -> TokenInfo {
        TokenInfo {
            token_name: "Pepe".to_string(),
            token_symbol: "PEPE".to_string(),
            decimals: 18,
            uniswap_v2_pair: "0xpair".to_string(),
            is_honeypot: true,
            is_mintable: true,
            buy_tax: "0".to_string(),
            sell_tax: "0.05".to_string(),
            trading_cooldown: true,
            ..TokenInfo::default()
        }
    }

    #[test]
    fn test_merge_of_identical_inputs_is_identity() {
        let x = sample();
        assert_eq!(merge(&x, &x, &x), x);
    }

    #[test]
    fn test_bool_truth_table() {
        for mask in 0u8..8 {
            let (a, b, c) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let merged = merge(&with_honeypot(a), &with_honeypot(b), &with_honeypot(c));
            assert_eq!(merged.is_honeypot, a || b || c, "inputs {:?}", (a, b, c));
        }
    }

    #[test]
    fn test_every_flag_propagates() {
        let risky = TokenInfo {
            is_open_source: true,
            is_whitelisted: true,
            can_take_back_ownership: true,
            owner_change_balance: true,
            cannot_buy: true,
            cannot_sell_all: true,
            is_mintable: true,
            hidden_owner: true,
            transfer_pausable: true,
            is_blacklisted: true,
            external_call: true,
            trading_cooldown: true,
            ..TokenInfo::default()
        };
        let clean = TokenInfo::default();

        assert_eq!(merge(&clean, &clean, &risky), risky);
        assert_eq!(merge(&clean, &risky, &clean), risky);
    }

    #[test]
    fn test_decimals_take_maximum() {
        let max = |a, b, c| merge(&with_decimals(a), &with_decimals(b), &with_decimals(c)).decimals;
        assert_eq!(max(0, 9, 18), 18);
        assert_eq!(max(18, 0, 9), 18);
        assert_eq!(max(-5, -2, -9), -2);
        assert_eq!(max(-1, 0, -3), 0);
        assert_eq!(max(6, 6, 6), 6);
    }

    #[test]
    fn test_longest_text_wins() {
        let merged = merge(&with_name(""), &with_name("abc"), &with_name("abcde"));
        assert_eq!(merged.token_name, "abcde");

        let merged = merge(&with_name("abcde"), &with_name(""), &with_name("abc"));
        assert_eq!(merged.token_name, "abcde");
    }

    #[test]
    fn test_equal_length_text_keeps_first_argument() {
        let merged = merge(&with_name("first"), &with_name("secnd"), &with_name("third"));
        assert_eq!(merged.token_name, "first");

        let merged = merge(&with_name(""), &with_name("bbbb"), &with_name("cccc"));
        assert_eq!(merged.token_name, "bbbb");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "ééé" is 6 bytes but 3 characters
        let merged = merge(&with_name("abcd"), &with_name("ééé"), &with_name(""));
        assert_eq!(merged.token_name, "abcd");
    }

    #[test]
    fn test_taxes_use_string_length_not_value() {
        let a = TokenInfo {
            sell_tax: "9".to_string(),
            ..TokenInfo::default()
        };
        let b = TokenInfo {
            sell_tax: "0.01".to_string(),
            ..TokenInfo::default()
        };
        assert_eq!(merge(&a, &b, &TokenInfo::default()).sell_tax, "0.01");
    }

    #[test]
    fn test_personal_slippage_modifiable_always_false() {
        let flagged = TokenInfo {
            personal_slippage_modifiable: true,
            ..TokenInfo::default()
        };
        let merged = merge(&flagged, &flagged, &flagged);
        assert!(!merged.personal_slippage_modifiable);
    }

    #[test]
    fn test_three_empty_reports_merge_to_empty() {
        let empty = TokenInfo::default();
        assert!(merge(&empty, &empty, &empty).is_empty());
    }
}
