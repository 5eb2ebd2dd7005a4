//! Fridge inventory models

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Category, Freshness, Unit};

/// One inventory entry exactly as the backend returned it.
///
/// Field names drift between backend versions (`quantity` vs `amount`,
/// `daysLeft` vs `days_left`), so the record is kept as an open JSON map and
/// read through ordered fallback lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInventoryRecord(pub Value);

impl RawInventoryRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a dotted path such as `ingredient.name`. JSON `null` counts
    /// as absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }

    /// First path in `paths` holding a usable number (JSON number or numeric string)
    pub fn decimal(&self, paths: &[&str]) -> Option<Decimal> {
        paths
            .iter()
            .find_map(|path| self.get(path).and_then(value_to_decimal))
    }

    /// First path in `paths` holding a non-blank string or a number
    pub fn string(&self, paths: &[&str]) -> Option<String> {
        paths
            .iter()
            .find_map(|path| self.get(path).and_then(value_to_string))
    }

    /// First path in `paths` holding a whole number of days. Fractional
    /// values round up so that `x <= n` and `ceil(x) <= n` agree for whole `n`;
    /// values beyond `i64` saturate.
    pub fn days(&self, paths: &[&str]) -> Option<i64> {
        paths.iter().find_map(|path| {
            self.get(path).and_then(value_to_decimal).map(|days| {
                let days = days.ceil();
                days.to_i64().unwrap_or(if days.is_sign_negative() {
                    i64::MIN
                } else {
                    i64::MAX
                })
            })
        })
    }
}

impl From<Value> for RawInventoryRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn value_to_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::String(_) => None,
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Where an item's `price_per_unit` came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Sent by the backend: per kilogram/litre for `g`/`ml`, per piece otherwise
    #[default]
    Supplied,
    /// `total_price / total_amount`, so already per tracked unit
    Derived,
}

/// Canonical shape of a fridge item after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInventoryItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Quantity originally acquired, in `unit`
    pub total_amount: Decimal,
    /// Quantity left, in `unit`. Not clamped to `total_amount`.
    pub remaining_amount: Decimal,
    pub unit: Unit,
    pub total_price: Decimal,
    pub price_per_unit: Decimal,
    #[serde(default)]
    pub price_source: PriceSource,
    /// ISO-8601 timestamp, empty when unknown
    pub expires_at: String,
    pub days_left: i64,
    pub freshness: Freshness,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_skips_null_and_missing() {
        let raw = RawInventoryRecord::new(json!({ "quantity": null, "ingredient": { "name": "Ser" } }));
        assert!(raw.get("quantity").is_none());
        assert!(raw.get("amount").is_none());
        assert_eq!(raw.get("ingredient.name"), Some(&json!("Ser")));
        assert!(raw.get("ingredient.category").is_none());
    }

    #[test]
    fn test_decimal_fallback_order() {
        let raw = RawInventoryRecord::new(json!({ "quantity": null, "amount": "250.5" }));
        assert_eq!(raw.decimal(&["quantity", "amount"]), Some(Decimal::from_str("250.5").unwrap()));

        let raw = RawInventoryRecord::new(json!({ "quantity": 0, "amount": 7 }));
        assert_eq!(raw.decimal(&["quantity", "amount"]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_decimal_ignores_non_numeric() {
        let raw = RawInventoryRecord::new(json!({ "quantity": "a lot", "amount": true }));
        assert_eq!(raw.decimal(&["quantity", "amount"]), None);
    }

    #[test]
    fn test_days_rounds_up() {
        let raw = RawInventoryRecord::new(json!({ "daysLeft": 1.5 }));
        assert_eq!(raw.days(&["daysLeft"]), Some(2));
        let raw = RawInventoryRecord::new(json!({ "days_left": -2 }));
        assert_eq!(raw.days(&["daysLeft", "days_left"]), Some(-2));
    }

    #[test]
    fn test_days_beyond_i64_saturate() {
        let raw = RawInventoryRecord::new(json!({ "daysLeft": 1e20 }));
        assert_eq!(raw.days(&["daysLeft"]), Some(i64::MAX));
        let raw = RawInventoryRecord::new(json!({ "daysLeft": "-100000000000000000000" }));
        assert_eq!(raw.days(&["daysLeft"]), Some(i64::MIN));
    }

    #[test]
    fn test_string_accepts_numbers() {
        let raw = RawInventoryRecord::new(json!({ "id": 42 }));
        assert_eq!(raw.string(&["id"]), Some("42".to_string()));
    }

    #[test]
    fn test_blank_string_falls_through() {
        let raw = RawInventoryRecord::new(json!({ "ingredient": { "name": "  " }, "name": "Kefir" }));
        assert_eq!(raw.string(&["ingredient.name", "name"]), Some("Kefir".to_string()));
    }

    #[test]
    fn test_non_object_record_is_empty() {
        let raw = RawInventoryRecord::new(json!("not a record"));
        assert!(raw.get("quantity").is_none());
        assert_eq!(raw.decimal(&["quantity"]), None);
    }
}
