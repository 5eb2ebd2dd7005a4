//! Validation utilities for fridge settings and request parameters

use crate::models::FreshnessThresholds;

/// Longest "expiring soon" window a caller may ask for
pub const MAX_EXPIRING_WINDOW_DAYS: i64 = 30;

// ============================================================================
// Freshness Settings
// ============================================================================

/// Validate that the danger tier ends before the warning tier
pub fn validate_thresholds(thresholds: &FreshnessThresholds) -> Result<(), &'static str> {
    if thresholds.danger_days < 0 {
        return Err("Danger threshold cannot be negative");
    }
    if thresholds.warning_days < thresholds.danger_days {
        return Err("Warning threshold must not be below the danger threshold");
    }
    Ok(())
}

/// Validate the "expiring soon" window
pub fn validate_expiring_window(days: i64) -> Result<(), &'static str> {
    if days < 0 {
        return Err("Expiring window cannot be negative");
    }
    if days > MAX_EXPIRING_WINDOW_DAYS {
        return Err("Expiring window must be at most 30 days");
    }
    Ok(())
}

// ============================================================================
// Presentation Settings
// ============================================================================

/// Validate an ISO 4217 style currency code (three uppercase letters)
pub fn validate_currency_code(code: &str) -> Result<(), &'static str> {
    if code.len() != 3 {
        return Err("Currency code must be 3 characters");
    }
    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err("Currency code must be uppercase letters only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_thresholds_valid() {
        assert!(validate_thresholds(&FreshnessThresholds::default()).is_ok());
        assert!(validate_thresholds(&FreshnessThresholds::new(0, 0)).is_ok());
        assert!(validate_thresholds(&FreshnessThresholds::new(2, 7)).is_ok());
    }

    #[test]
    fn test_validate_thresholds_invalid() {
        assert!(validate_thresholds(&FreshnessThresholds::new(-1, 3)).is_err());
        assert!(validate_thresholds(&FreshnessThresholds::new(5, 3)).is_err());
    }

    #[test]
    fn test_validate_expiring_window() {
        assert!(validate_expiring_window(0).is_ok());
        assert!(validate_expiring_window(2).is_ok());
        assert!(validate_expiring_window(30).is_ok());
        assert!(validate_expiring_window(-1).is_err());
        assert!(validate_expiring_window(31).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("PLN").is_ok());
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("pln").is_err()); // Lowercase
        assert!(validate_currency_code("PL").is_err()); // Too short
        assert!(validate_currency_code("PLNX").is_err()); // Too long
        assert!(validate_currency_code("P1N").is_err()); // Digit
    }
}
