//! Measurement units for fridge items

use serde::{Deserialize, Serialize};

/// Unit an item's quantity is expressed in.
///
/// Only `g` and `ml` (any case) are priced per kilogram/litre while tracked
/// in grams/millilitres; every other unit, spelled-out variants included, is
/// priced per unit and kept exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Grams,
    Milliliters,
    #[default]
    Pieces,
    /// Backend-supplied unit we do not know about, kept verbatim
    Other(String),
}

impl Unit {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "g" => Unit::Grams,
            "ml" => Unit::Milliliters,
            "pcs" => Unit::Pieces,
            _ => Unit::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Pieces => "pcs",
            Unit::Other(raw) => raw,
        }
    }

    /// Whether quantities are tracked in thousandths of the priced unit
    pub fn is_metric_fraction(&self) -> bool {
        matches!(self, Unit::Grams | Unit::Milliliters)
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        Unit::parse(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Unit::parse("G"), Unit::Grams);
        assert_eq!(Unit::parse("ML"), Unit::Milliliters);
        assert_eq!(Unit::parse("Pcs"), Unit::Pieces);
        assert_eq!(Unit::parse(" g "), Unit::Grams);
    }

    #[test]
    fn test_unknown_unit_kept_verbatim() {
        assert_eq!(Unit::parse("bunch"), Unit::Other("bunch".to_string()));
        assert_eq!(Unit::parse("bunch").as_str(), "bunch");
        assert!(!Unit::parse("kg").is_metric_fraction());
    }

    #[test]
    fn test_spelled_out_units_are_not_metric() {
        for raw in ["gram", "gr", "grams", "г", "мл", "milliliters", "szt", "шт"] {
            let unit = Unit::parse(raw);
            assert_eq!(unit, Unit::Other(raw.to_string()));
            assert_eq!(unit.as_str(), raw);
            assert!(!unit.is_metric_fraction());
        }
    }

    #[test]
    fn test_serde_as_string() {
        assert_eq!(serde_json::to_string(&Unit::Grams).unwrap(), "\"g\"");
        let unit: Unit = serde_json::from_str("\"ML\"").unwrap();
        assert_eq!(unit, Unit::Milliliters);
    }
}
