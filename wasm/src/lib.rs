//! WebAssembly module for the fridge inventory
//!
//! Provides client-side computation for:
//! - Inventory record normalization
//! - Inventory valuation and dashboard summaries
//! - Usage and price labels
//! - Category labels

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use fridge_shared::models::*;
pub use fridge_shared::types::*;

use fridge_shared::{
    calculate_inventory_value, category_labels, format_price, format_usage_percent,
    group_by_freshness, normalize_all, parse_inventory_payload, FreshnessGroups,
    InventorySummary, SummaryOptions,
};

/// Normalize a raw inventory payload (array or envelope) into canonical items
#[wasm_bindgen]
pub fn normalize_inventory(payload_json: &str) -> Result<String, JsValue> {
    normalize_payload(payload_json).map_err(to_js_error)
}

/// Total value of a raw inventory payload
#[wasm_bindgen]
pub fn inventory_value(payload_json: &str) -> Result<f64, JsValue> {
    payload_value(payload_json)
        .map(|value| value.to_f64().unwrap_or(0.0))
        .map_err(to_js_error)
}

/// Items grouped by freshness plus dashboard totals, as JSON
#[wasm_bindgen]
pub fn summarize_inventory(
    payload_json: &str,
    expiring_soon_days: i32,
    currency: Option<String>,
) -> Result<String, JsValue> {
    let mut options = SummaryOptions {
        expiring_soon_days: i64::from(expiring_soon_days),
        ..SummaryOptions::default()
    };
    if let Some(currency) = currency {
        options.currency = currency;
    }
    summarize_payload(payload_json, &options).map_err(to_js_error)
}

/// Usage label such as `"40%"`
#[wasm_bindgen]
pub fn usage_percent(total: f64, remaining: f64) -> String {
    format_usage_percent(to_decimal(total), to_decimal(remaining))
}

/// Price label such as `"12.50 PLN"`; defaults to PLN
#[wasm_bindgen]
pub fn price_label(price: f64, currency: Option<String>) -> String {
    let currency = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    format_price(to_decimal(price), &currency)
}

/// Display label for a category key in the given language (`ru`, `pl`, `en`)
#[wasm_bindgen]
pub fn category_label(category: &str, lang: &str) -> String {
    let language = Language::from_code(lang).unwrap_or_default();
    Category::parse(category).label(language).to_string()
}

/// All category labels for a language as `[key, label]` pairs
#[wasm_bindgen]
pub fn category_label_table(lang: &str) -> js_sys::Array {
    let language = Language::from_code(lang).unwrap_or_default();
    category_labels(language)
        .into_iter()
        .map(|(category, label)| {
            js_sys::Array::of2(
                &JsValue::from_str(category.as_str()),
                &JsValue::from_str(label),
            )
        })
        .collect()
}

/// Freshness tier for a number of days left, using the default thresholds
#[wasm_bindgen]
pub fn freshness_for_days(days_left: i32) -> String {
    classify_freshness(i64::from(days_left)).to_string()
}

#[derive(serde::Serialize)]
struct FridgeView<'a> {
    items: &'a [NormalizedInventoryItem],
    groups: FreshnessGroups<'a>,
    summary: InventorySummary,
}

fn normalize_payload(payload_json: &str) -> Result<String, String> {
    let records = parse_inventory_payload(payload_json).map_err(|e| e.to_string())?;
    let items = normalize_all(&records, &FreshnessThresholds::default());
    serde_json::to_string(&items).map_err(|e| e.to_string())
}

fn payload_value(payload_json: &str) -> Result<Decimal, String> {
    let records = parse_inventory_payload(payload_json).map_err(|e| e.to_string())?;
    let items = normalize_all(&records, &FreshnessThresholds::default());
    Ok(calculate_inventory_value(&items))
}

fn summarize_payload(payload_json: &str, options: &SummaryOptions) -> Result<String, String> {
    let records = parse_inventory_payload(payload_json).map_err(|e| e.to_string())?;
    let items = normalize_all(&records, &FreshnessThresholds::default());
    let view = FridgeView {
        items: &items,
        groups: group_by_freshness(&items),
        summary: InventorySummary::from_items(&items, options),
    };
    serde_json::to_string(&view).map_err(|e| e.to_string())
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

fn to_js_error(message: String) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!("fridge: {}", message)));
    JsValue::from_str(&message)
}
