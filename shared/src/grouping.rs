//! Freshness grouping and "expiring soon" statistics

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Freshness, NormalizedInventoryItem};
use crate::valuation::calculate_fridge_value;

/// Default window for the "expiring soon" counter, independent of the
/// freshness tier boundaries.
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 2;

/// Items partitioned by their freshness tag
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FreshnessGroups<'a> {
    pub fresh: Vec<&'a NormalizedInventoryItem>,
    pub warning: Vec<&'a NormalizedInventoryItem>,
    pub danger: Vec<&'a NormalizedInventoryItem>,
}

impl<'a> FreshnessGroups<'a> {
    pub fn bucket(&self, freshness: Freshness) -> &[&'a NormalizedInventoryItem] {
        match freshness {
            Freshness::Fresh => &self.fresh,
            Freshness::Warning => &self.warning,
            Freshness::Danger => &self.danger,
        }
    }

    pub fn len(&self) -> usize {
        self.fresh.len() + self.warning.len() + self.danger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stable partition by the stored `freshness` tag; input order is kept
/// within each bucket.
pub fn group_by_freshness(items: &[NormalizedInventoryItem]) -> FreshnessGroups<'_> {
    let mut groups = FreshnessGroups::default();
    for item in items {
        match item.freshness {
            Freshness::Fresh => groups.fresh.push(item),
            Freshness::Warning => groups.warning.push(item),
            Freshness::Danger => groups.danger.push(item),
        }
    }
    groups
}

/// Number of items with at most `max_days` left
pub fn count_expiring_soon(items: &[NormalizedInventoryItem], max_days: i64) -> usize {
    items.iter().filter(|item| item.days_left <= max_days).count()
}

/// Value of the items with at most `max_days` left
pub fn expiring_soon_value(items: &[NormalizedInventoryItem], max_days: i64) -> Decimal {
    calculate_fridge_value(items, |item| item.days_left <= max_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawInventoryRecord;
    use crate::normalize::normalize;
    use serde_json::json;

    fn items_with_days(days: &[i64]) -> Vec<NormalizedInventoryItem> {
        days.iter()
            .enumerate()
            .map(|(i, d)| {
                normalize(&RawInventoryRecord::new(json!({
                    "id": i,
                    "daysLeft": d,
                    "quantity": 1,
                    "totalPrice": 10,
                    "unit": "pcs"
                })))
            })
            .collect()
    }

    #[test]
    fn test_group_by_freshness() {
        let items = items_with_days(&[5, 0, 2, 10, -1, 3]);
        let groups = group_by_freshness(&items);

        let ids = |bucket: &[&NormalizedInventoryItem]| -> Vec<String> {
            bucket.iter().map(|i| i.id.clone()).collect()
        };
        assert_eq!(ids(&groups.fresh), vec!["0", "3"]);
        assert_eq!(ids(&groups.warning), vec!["2", "5"]);
        assert_eq!(ids(&groups.danger), vec!["1", "4"]);
        assert_eq!(groups.len(), items.len());
    }

    #[test]
    fn test_group_uses_stored_tag() {
        let mut items = items_with_days(&[10]);
        items[0].freshness = Freshness::Danger;
        let groups = group_by_freshness(&items);
        assert_eq!(groups.danger.len(), 1);
        assert!(groups.fresh.is_empty());
    }

    #[test]
    fn test_empty_groups() {
        let groups = group_by_freshness(&[]);
        assert!(groups.is_empty());
        assert!(groups.bucket(Freshness::Warning).is_empty());
    }

    #[test]
    fn test_count_expiring_soon_default_window() {
        let items = items_with_days(&[-1, 0, 1, 2, 3, 4]);
        assert_eq!(count_expiring_soon(&items, DEFAULT_EXPIRING_SOON_DAYS), 4);
        assert_eq!(count_expiring_soon(&items, 0), 2);
        assert_eq!(count_expiring_soon(&[], DEFAULT_EXPIRING_SOON_DAYS), 0);
    }

    #[test]
    fn test_expiring_soon_window_differs_from_tiers() {
        // 2 days left: counted as expiring soon but tiered as warning, not danger
        let items = items_with_days(&[2]);
        assert_eq!(count_expiring_soon(&items, DEFAULT_EXPIRING_SOON_DAYS), 1);
        assert_eq!(items[0].freshness, Freshness::Warning);
    }

    #[test]
    fn test_expiring_soon_value() {
        let items = items_with_days(&[1, 2, 7]);
        assert_eq!(expiring_soon_value(&items, 2), Decimal::from(20));
    }
}
