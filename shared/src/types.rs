//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[serde(rename = "ru", alias = "russian")]
    Russian,
    #[default]
    #[serde(rename = "pl", alias = "polish")]
    Polish,
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Russian, Language::Polish, Language::English];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::Polish => "pl",
            Language::English => "en",
        }
    }

    /// Resolve a language from an ISO code or a full name, case-insensitively.
    /// Region suffixes such as `pl-PL` are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "ru" | "russian" => Some(Language::Russian),
            "pl" | "polish" => Some(Language::Polish),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Currency used when the caller does not supply one
pub const DEFAULT_CURRENCY: &str = "PLN";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Russian.code(), "ru");
        assert_eq!(Language::Polish.code(), "pl");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("PL"), Some(Language::Polish));
        assert_eq!(Language::from_code("en-US"), Some(Language::English));
        assert_eq!(Language::from_code("ru_RU"), Some(Language::Russian));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_language_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Polish).unwrap(), "\"pl\"");
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
