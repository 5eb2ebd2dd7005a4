//! Freshness tiers derived from days-until-expiry

use serde::{Deserialize, Serialize};

/// Urgency classification of a fridge item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Fresh,
    Warning,
    Danger,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Warning => "warning",
            Freshness::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day boundaries for the freshness tiers.
///
/// These are independent of the "expiring soon" window used by
/// [`crate::grouping::count_expiring_soon`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreshnessThresholds {
    /// Items with `days_left <= danger_days` are `Danger`
    pub danger_days: i64,
    /// Items with `danger_days < days_left <= warning_days` are `Warning`
    pub warning_days: i64,
}

impl FreshnessThresholds {
    pub const DEFAULT_DANGER_DAYS: i64 = 1;
    pub const DEFAULT_WARNING_DAYS: i64 = 3;

    pub fn new(danger_days: i64, warning_days: i64) -> Self {
        Self {
            danger_days,
            warning_days,
        }
    }

    pub fn classify(&self, days_left: i64) -> Freshness {
        if days_left <= self.danger_days {
            Freshness::Danger
        } else if days_left <= self.warning_days {
            Freshness::Warning
        } else {
            Freshness::Fresh
        }
    }
}

impl Default for FreshnessThresholds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DANGER_DAYS, Self::DEFAULT_WARNING_DAYS)
    }
}

/// Classify with the default thresholds
pub fn classify_freshness(days_left: i64) -> Freshness {
    FreshnessThresholds::default().classify(days_left)
}
