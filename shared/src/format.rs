//! Display formatting for fridge figures

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Share of `total` already consumed, rounded half-up to a whole percent.
/// A non-positive `total` yields `"0%"`; out-of-range ratios saturate.
pub fn format_usage_percent(total: Decimal, remaining: Decimal) -> String {
    if total <= Decimal::ZERO {
        return "0%".to_string();
    }
    let used = total.saturating_sub(remaining);
    let percent = used
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if used.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        });
    let rounded = percent.saturating_add(Decimal::new(5, 1)).floor();
    let whole = rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    });
    format!("{}%", whole)
}

/// Two-decimal amount followed by the currency code, e.g. `"12.50 PLN"`
pub fn format_price(price: Decimal, currency: &str) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} {}", rounded, currency)
}
