//! Inventory valuation
//!
//! A backend-supplied `price_per_unit` is per kilogram/litre for items
//! tracked in grams or millilitres and per piece otherwise; [`unit_divisor`]
//! reconciles the two. A price derived from `total_price / total_amount` is
//! already per tracked unit and is never divided.

use rust_decimal::Decimal;

use crate::models::{NormalizedInventoryItem, PriceSource, Unit};

/// Divisor turning a tracked quantity into the priced quantity
pub fn unit_divisor(unit: &Unit) -> Decimal {
    if unit.is_metric_fraction() {
        Decimal::ONE_THOUSAND
    } else {
        Decimal::ONE
    }
}

/// Divisor for a specific item, taking the price source into account
pub fn price_divisor(item: &NormalizedInventoryItem) -> Decimal {
    match item.price_source {
        PriceSource::Supplied => unit_divisor(&item.unit),
        PriceSource::Derived => Decimal::ONE,
    }
}

/// Value of what is left of a single item. Unpriced items are worth zero.
pub fn item_value(item: &NormalizedInventoryItem) -> Decimal {
    if item.price_per_unit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (item.remaining_amount / price_divisor(item)).saturating_mul(item.price_per_unit)
}

/// Sum of item values, saturating at the `Decimal` bounds
pub fn sum_values<'a, I>(items: I) -> Decimal
where
    I: IntoIterator<Item = &'a NormalizedInventoryItem>,
{
    items
        .into_iter()
        .map(item_value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Total value of the remaining stock
pub fn calculate_inventory_value(items: &[NormalizedInventoryItem]) -> Decimal {
    sum_values(items)
}

/// Total value of the items accepted by `predicate`
pub fn calculate_fridge_value<P>(items: &[NormalizedInventoryItem], predicate: P) -> Decimal
where
    P: Fn(&NormalizedInventoryItem) -> bool,
{
    sum_values(items.iter().filter(|&item| predicate(item)))
}
