//! Aggregate figures shown on the fridge dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_price;
use crate::grouping::{
    count_expiring_soon, expiring_soon_value, group_by_freshness, DEFAULT_EXPIRING_SOON_DAYS,
};
use crate::models::{Category, Freshness, NormalizedInventoryItem};
use crate::types::DEFAULT_CURRENCY;
use crate::valuation::{calculate_inventory_value, sum_values};

/// Knobs for building a summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Window for the "expiring soon" counter
    pub expiring_soon_days: i64,
    pub currency: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Value held in one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValue {
    pub category: Category,
    pub item_count: usize,
    pub value: Decimal,
}

/// Dashboard totals for a set of normalized items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_value: Decimal,
    pub fresh_count: usize,
    pub warning_count: usize,
    pub danger_count: usize,
    pub expiring_soon_days: i64,
    pub expiring_soon_count: usize,
    pub expiring_soon_value: Decimal,
    /// Non-empty categories, in category order
    pub by_category: Vec<CategoryValue>,
    pub currency: String,
    pub total_value_label: String,
    pub expiring_soon_value_label: String,
}

impl InventorySummary {
    pub fn from_items(items: &[NormalizedInventoryItem], options: &SummaryOptions) -> Self {
        let groups = group_by_freshness(items);
        let count = |freshness: Freshness| groups.bucket(freshness).len();

        let total_value = calculate_inventory_value(items);
        let soon_value = expiring_soon_value(items, options.expiring_soon_days);

        Self {
            item_count: items.len(),
            total_value,
            fresh_count: count(Freshness::Fresh),
            warning_count: count(Freshness::Warning),
            danger_count: count(Freshness::Danger),
            expiring_soon_days: options.expiring_soon_days,
            expiring_soon_count: count_expiring_soon(items, options.expiring_soon_days),
            expiring_soon_value: soon_value,
            by_category: value_by_category(items),
            currency: options.currency.clone(),
            total_value_label: format_price(total_value, &options.currency),
            expiring_soon_value_label: format_price(soon_value, &options.currency),
        }
    }
}

/// Per-category value breakdown, skipping empty categories
pub fn value_by_category(items: &[NormalizedInventoryItem]) -> Vec<CategoryValue> {
    Category::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<&NormalizedInventoryItem> =
                items.iter().filter(|i| i.category == *category).collect();
            if members.is_empty() {
                return None;
            }
            Some(CategoryValue {
                category: *category,
                item_count: members.len(),
                value: sum_values(members),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawInventoryRecord;
    use crate::normalize::normalize;
    use serde_json::json;

    fn fridge() -> Vec<NormalizedInventoryItem> {
        [
            json!({ "id": "1", "quantity": 1000, "unit": "ml", "totalPrice": 8, "daysLeft": 1,
                    "ingredient": { "name": "Mleko", "category": "dairy" } }),
            json!({ "id": "2", "quantity": 500, "unit": "g", "pricePerUnit": 30, "daysLeft": 6,
                    "ingredient": { "name": "Kurczak", "category": "meat" } }),
            json!({ "id": "3", "quantity": 1, "unit": "pcs", "totalPrice": 12, "daysLeft": 2,
                    "ingredient": { "name": "Oliwa z oliwek", "category": "other" } }),
            json!({ "id": "4", "quantity": 10, "unit": "pcs", "daysLeft": 20,
                    "name": "Jajka", "category": "eggs" }),
        ]
        .into_iter()
        .map(|value| normalize(&RawInventoryRecord::new(value)))
        .collect()
    }

    #[test]
    fn test_summary_totals() {
        let summary = InventorySummary::from_items(&fridge(), &SummaryOptions::default());

        assert_eq!(summary.item_count, 4);
        // 8 (milk) + 15 (chicken) + 12 (oil) + 0 (unpriced eggs)
        assert_eq!(summary.total_value, Decimal::from(35));
        assert_eq!(summary.danger_count, 1);
        assert_eq!(summary.warning_count, 1);
        assert_eq!(summary.fresh_count, 2);
        assert_eq!(summary.expiring_soon_count, 2);
        assert_eq!(summary.expiring_soon_value, Decimal::from(20));
        assert_eq!(summary.total_value_label, "35.00 PLN");
        assert_eq!(summary.expiring_soon_value_label, "20.00 PLN");
    }

    #[test]
    fn test_summary_by_category() {
        let summary = InventorySummary::from_items(&fridge(), &SummaryOptions::default());
        let categories: Vec<Category> = summary.by_category.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![Category::Meat, Category::Dairy, Category::Eggs, Category::Oil]
        );
        let oil = summary.by_category.iter().find(|c| c.category == Category::Oil).unwrap();
        assert_eq!(oil.value, Decimal::from(12));
    }

    #[test]
    fn test_summary_custom_window_and_currency() {
        let options = SummaryOptions {
            expiring_soon_days: 7,
            currency: "EUR".to_string(),
        };
        let summary = InventorySummary::from_items(&fridge(), &options);
        assert_eq!(summary.expiring_soon_count, 3);
        assert_eq!(summary.currency, "EUR");
        assert!(summary.total_value_label.ends_with(" EUR"));
    }

    #[test]
    fn test_summary_of_overflowing_stock() {
        let record = json!({ "quantity": "50000000000000000000000000000", "unit": "pcs",
                             "pricePerUnit": 1, "category": "other" });
        let items: Vec<NormalizedInventoryItem> = [record.clone(), record]
            .into_iter()
            .map(|value| normalize(&RawInventoryRecord::new(value)))
            .collect();

        let summary = InventorySummary::from_items(&items, &SummaryOptions::default());
        assert_eq!(summary.total_value, Decimal::MAX);
        assert_eq!(summary.expiring_soon_value, Decimal::MAX);
        assert_eq!(summary.by_category[0].value, Decimal::MAX);
        assert!(summary.total_value_label.ends_with(" PLN"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = InventorySummary::from_items(&[], &SummaryOptions::default());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.total_value_label, "0.00 PLN");
    }
}
