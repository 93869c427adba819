//! Best-effort numeric reading of currency-formatted price text.

use serde_json::Value;

use super::model::BusinessProfile;

pub const CURRENCY_SYMBOL: char = '₹';
const GROUP_SEPARATOR: char = ',';
/// Price assumed for a service that lists none.
const MISSING_PRICE: &str = "₹0";

/// Parses `₹2,500`-style text into a whole amount.
///
/// Returns `None` for anything that is not a non-negative integer once the
/// currency symbol and group separators are stripped.
pub fn parse_price(text: &str) -> Option<u64> {
    let digits: String = text
        .chars()
        .filter(|ch| *ch != CURRENCY_SYMBOL && *ch != GROUP_SEPARATOR)
        .collect();
    let digits = digits.trim();
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Lowest parsable service price. A service without a price counts as `₹0`;
/// unparsable or non-text prices are ignored.
pub fn starting_price(profile: &BusinessProfile) -> Option<u64> {
    profile
        .services
        .iter()
        .filter_map(|service| match &service.price {
            None => Some(MISSING_PRICE),
            Some(Value::String(text)) => Some(text.as_str()),
            Some(_) => None,
        })
        .filter_map(parse_price)
        .min()
}

/// Formats an amount with comma digit grouping: `1234567` -> `1,234,567`.
pub fn format_grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount the way prices are shown to customers: `₹2,500`.
pub fn format_amount(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_grouped(amount))
}
