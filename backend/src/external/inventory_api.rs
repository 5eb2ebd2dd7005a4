//! Inventory backend client
//!
//! Fetches the caller's fridge from the upstream API, forwarding their
//! bearer token unchanged.

use fridge_shared::{records_from_value, RawInventoryRecord};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Upstream inventory API client
#[derive(Clone)]
pub struct InventoryApiClient {
    client: Client,
    base_url: String,
    inventory_path: String,
}

impl InventoryApiClient {
    /// Create a new InventoryApiClient from configuration
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            inventory_path: config.inventory_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the inventory listing
    pub fn inventory_url(&self) -> String {
        if self.inventory_path.starts_with('/') {
            format!("{}{}", self.base_url, self.inventory_path)
        } else {
            format!("{}/{}", self.base_url, self.inventory_path)
        }
    }

    /// Fetch the raw inventory records visible to `token`
    pub async fn fetch_inventory(&self, token: &str) -> AppResult<Vec<RawInventoryRecord>> {
        let url = self.inventory_url();
        tracing::debug!("Fetching inventory from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Inventory request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::UpstreamUnauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Inventory service returned an error");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse inventory response: {}", e))
        })?;

        let records = records_from_value(payload)?;
        tracing::debug!("Upstream returned {} inventory records", records.len());
        Ok(records)
    }
}
