//! Configuration management for the fridge API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FRIDGE_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use fridge_shared::{
    validate_currency_code, validate_expiring_window, validate_thresholds, FreshnessThresholds,
    Language, SummaryOptions, DEFAULT_CURRENCY, DEFAULT_EXPIRING_SOON_DAYS,
};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream inventory backend
    pub upstream: UpstreamConfig,

    /// Fridge valuation settings
    pub fridge: FridgeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the inventory backend, e.g. `https://api.example.com`
    pub base_url: String,

    /// Path of the inventory listing endpoint
    pub inventory_path: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FridgeConfig {
    /// Items with at most this many days left are `danger`
    pub danger_days: i64,

    /// Items with at most this many days left (and above `danger_days`) are `warning`
    pub warning_days: i64,

    /// Window for the "expiring soon" counter, independent of the tiers
    pub expiring_soon_days: i64,

    /// Currency code used in price labels
    pub currency: String,

    /// Language for category labels when the request names none
    pub default_language: Language,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FRIDGE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", "http://localhost:8080")?
            .set_default("upstream.inventory_path", "/api/fridge/items")?
            .set_default("upstream.timeout_secs", 10)?
            .set_default("fridge.danger_days", FreshnessThresholds::DEFAULT_DANGER_DAYS)?
            .set_default("fridge.warning_days", FreshnessThresholds::DEFAULT_WARNING_DAYS)?
            .set_default("fridge.expiring_soon_days", DEFAULT_EXPIRING_SOON_DAYS)?
            .set_default("fridge.currency", DEFAULT_CURRENCY)?
            .set_default("fridge.default_language", "pl")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FRIDGE_ prefix)
            .add_source(
                Environment::with_prefix("FRIDGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the shared validators consider inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_thresholds(&self.fridge.thresholds()).map_err(invalid)?;
        validate_expiring_window(self.fridge.expiring_soon_days).map_err(invalid)?;
        validate_currency_code(&self.fridge.currency).map_err(invalid)?;
        if self.upstream.base_url.trim().is_empty() {
            return Err(invalid("Upstream base URL must not be empty"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Message(message.to_string())
}

impl FridgeConfig {
    pub fn thresholds(&self) -> FreshnessThresholds {
        FreshnessThresholds::new(self.danger_days, self.warning_days)
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            expiring_soon_days: self.expiring_soon_days,
            currency: self.currency.clone(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            inventory_path: "/api/fridge/items".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            danger_days: FreshnessThresholds::DEFAULT_DANGER_DAYS,
            warning_days: FreshnessThresholds::DEFAULT_WARNING_DAYS,
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            currency: DEFAULT_CURRENCY.to_string(),
            default_language: Language::Polish,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            fridge: FridgeConfig::default(),
        }
    }
}
