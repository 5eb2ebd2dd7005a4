//! Fridge service: normalization and dashboard snapshots over raw payloads

use chrono::{DateTime, Utc};
use fridge_shared::{
    category_labels, group_by_freshness, normalize_all, Category, FreshnessGroups,
    FreshnessThresholds, InventorySummary, Language, NormalizedInventoryItem, RawInventoryRecord,
    SummaryOptions,
};
use serde::Serialize;

use crate::config::FridgeConfig;

/// Fridge service holding the configured thresholds
#[derive(Clone, Debug)]
pub struct FridgeService {
    thresholds: FreshnessThresholds,
    summary_options: SummaryOptions,
    default_language: Language,
}

/// Items split by freshness tier
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedItems {
    pub fresh: Vec<NormalizedInventoryItem>,
    pub warning: Vec<NormalizedInventoryItem>,
    pub danger: Vec<NormalizedInventoryItem>,
}

impl From<FreshnessGroups<'_>> for GroupedItems {
    fn from(groups: FreshnessGroups<'_>) -> Self {
        let owned = |bucket: Vec<&NormalizedInventoryItem>| -> Vec<NormalizedInventoryItem> {
            bucket.into_iter().cloned().collect()
        };
        Self {
            fresh: owned(groups.fresh),
            warning: owned(groups.warning),
            danger: owned(groups.danger),
        }
    }
}

/// Everything the fridge screen renders
#[derive(Debug, Clone, Serialize)]
pub struct FridgeSnapshot {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<NormalizedInventoryItem>,
    pub groups: GroupedItems,
    pub summary: InventorySummary,
}

/// One row of a category label table
#[derive(Debug, Clone, Serialize)]
pub struct CategoryLabel {
    pub category: Category,
    pub label: &'static str,
}

/// Category labels for one language
#[derive(Debug, Clone, Serialize)]
pub struct CategoryLabels {
    pub language: Language,
    pub labels: Vec<CategoryLabel>,
}

impl FridgeService {
    /// Create a new FridgeService from configuration
    pub fn new(config: &FridgeConfig) -> Self {
        Self {
            thresholds: config.thresholds(),
            summary_options: config.summary_options(),
            default_language: config.default_language,
        }
    }

    /// Normalize raw records with the configured thresholds
    pub fn normalize(&self, records: &[RawInventoryRecord]) -> Vec<NormalizedInventoryItem> {
        let items = normalize_all(records, &self.thresholds);
        tracing::debug!("Normalized {} inventory records", items.len());
        items
    }

    /// Build a snapshot; `expiring_soon_days` overrides the configured window
    pub fn snapshot(
        &self,
        records: &[RawInventoryRecord],
        expiring_soon_days: Option<i64>,
    ) -> FridgeSnapshot {
        let items = self.normalize(records);

        let mut options = self.summary_options.clone();
        if let Some(days) = expiring_soon_days {
            options.expiring_soon_days = days;
        }

        let summary = InventorySummary::from_items(&items, &options);
        let groups = GroupedItems::from(group_by_freshness(&items));

        tracing::info!(
            items = summary.item_count,
            expiring_soon = summary.expiring_soon_count,
            total_value = %summary.total_value,
            "Built fridge snapshot"
        );

        FridgeSnapshot {
            generated_at: Utc::now(),
            items,
            groups,
            summary,
        }
    }

    /// Category labels, falling back to the configured language
    pub fn category_labels(&self, language: Option<Language>) -> CategoryLabels {
        let language = language.unwrap_or(self.default_language);
        CategoryLabels {
            language,
            labels: category_labels(language)
                .into_iter()
                .map(|(category, label)| CategoryLabel { category, label })
                .collect(),
        }
    }
}
