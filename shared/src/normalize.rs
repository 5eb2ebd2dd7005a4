//! Raw inventory record normalization
//!
//! Turns whatever shape the backend sent into a [`NormalizedInventoryItem`].
//! Every lookup falls back through alternate field names and ends at a safe
//! default, so normalization never fails.

use rust_decimal::Decimal;

use crate::models::{
    Category, FreshnessThresholds, NormalizedInventoryItem, PriceSource, RawInventoryRecord, Unit,
};

/// Name used when the record carries none
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

const ID_FIELDS: &[&str] = &["id", "_id"];
const NAME_FIELDS: &[&str] = &["ingredient.name", "name"];
const CATEGORY_FIELDS: &[&str] = &["ingredient.category", "category"];
const UNIT_FIELDS: &[&str] = &["unit", "ingredient.unit"];
const TOTAL_FIELDS: &[&str] = &["quantity", "amount"];
const REMAINING_FIELDS: &[&str] = &["quantityRemaining", "remainingAmount"];
const TOTAL_PRICE_FIELDS: &[&str] = &["totalPrice", "priceTotal", "price"];
const PRICE_PER_UNIT_FIELDS: &[&str] = &["pricePerUnit"];
const DAYS_LEFT_FIELDS: &[&str] = &["daysLeft", "days_left"];
const EXPIRES_AT_FIELDS: &[&str] = &["expiresAt", "expires_at"];

// Lowercase name fragments (RU / PL / EN) that override the backend category.
const OIL_TOKENS: &[&str] = &["масло", "olej", "oliwa", "oil"];
const SAUCE_TOKENS: &[&str] = &[
    "соус", "кетчуп", "майонез", "sos", "majonez", "sauce", "ketchup", "mayonnaise",
];
const CONDIMENT_TOKENS: &[&str] = &["соль", "перец", "sól", "pieprz", "salt", "pepper"];

/// Normalize with the default freshness thresholds
pub fn normalize(raw: &RawInventoryRecord) -> NormalizedInventoryItem {
    normalize_with(raw, &FreshnessThresholds::default())
}

/// Normalize a whole payload
pub fn normalize_all(
    records: &[RawInventoryRecord],
    thresholds: &FreshnessThresholds,
) -> Vec<NormalizedInventoryItem> {
    records
        .iter()
        .map(|raw| normalize_with(raw, thresholds))
        .collect()
}

pub fn normalize_with(
    raw: &RawInventoryRecord,
    thresholds: &FreshnessThresholds,
) -> NormalizedInventoryItem {
    let name = raw
        .string(NAME_FIELDS)
        .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string());

    let total_amount = raw.decimal(TOTAL_FIELDS).unwrap_or(Decimal::ZERO);
    // No remaining-quantity tracking means nothing has been used yet
    let remaining_amount = raw.decimal(REMAINING_FIELDS).unwrap_or(total_amount);

    let total_price = raw.decimal(TOTAL_PRICE_FIELDS).unwrap_or(Decimal::ZERO);
    let (price_per_unit, price_source) = match raw.decimal(PRICE_PER_UNIT_FIELDS) {
        Some(supplied) => (supplied.max(Decimal::ZERO), PriceSource::Supplied),
        None => (
            derive_price_per_unit(total_price, total_amount),
            PriceSource::Derived,
        ),
    };

    let days_left = raw.days(DAYS_LEFT_FIELDS).unwrap_or(0);
    let expires_at = raw.string(EXPIRES_AT_FIELDS).unwrap_or_default();

    let raw_category = raw
        .string(CATEGORY_FIELDS)
        .map(|category| Category::parse(&category))
        .unwrap_or(Category::Other);
    let category = resolve_category(raw_category, &name);

    let unit = raw
        .string(UNIT_FIELDS)
        .map(|unit| Unit::parse(&unit))
        .unwrap_or_default();

    NormalizedInventoryItem {
        id: raw.string(ID_FIELDS).unwrap_or_default(),
        name,
        category,
        total_amount,
        remaining_amount,
        unit,
        total_price,
        price_per_unit,
        price_source,
        expires_at,
        days_left,
        freshness: thresholds.classify(days_left),
    }
}

/// Price of one unit; zero unless both price and quantity are positive and
/// the quotient fits in a `Decimal`
pub fn derive_price_per_unit(total_price: Decimal, total_amount: Decimal) -> Decimal {
    if total_price > Decimal::ZERO && total_amount > Decimal::ZERO {
        total_price
            .checked_div(total_amount)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Backend categories are wrong for oils, sauces and seasonings; the item
/// name wins for those.
pub fn resolve_category(raw_category: Category, name: &str) -> Category {
    let name = name.to_lowercase();
    let mentions = |tokens: &[&str]| tokens.iter().any(|token| name.contains(token));

    if mentions(OIL_TOKENS) {
        Category::Oil
    } else if mentions(SAUCE_TOKENS) {
        Category::Sauce
    } else if mentions(CONDIMENT_TOKENS) {
        Category::Condiment
    } else {
        raw_category
    }
}
