//! HTTP handlers for fridge endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use fridge_shared::{records_from_value, Language, NormalizedInventoryItem};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::fridge::{CategoryLabels, FridgeSnapshot};
use crate::AppState;

/// Query parameters for snapshot endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct SnapshotQuery {
    /// Overrides the configured "expiring soon" window
    #[validate(range(min = 0, max = 30))]
    pub max_days: Option<i64>,
}

/// Query parameters for the category label table
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    pub lang: Option<String>,
}

/// Normalize a raw inventory payload
pub async fn normalize_inventory(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<Vec<NormalizedInventoryItem>>> {
    let records = records_from_value(payload)?;
    Ok(Json(state.fridge.normalize(&records)))
}

/// Summarize a raw inventory payload sent by the client
pub async fn summarize_inventory(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
    Json(payload): Json<Value>,
) -> AppResult<Json<FridgeSnapshot>> {
    validate_query(&query)?;
    let records = records_from_value(payload)?;
    Ok(Json(state.fridge.snapshot(&records, query.max_days)))
}

/// Fetch the caller's inventory upstream and summarize it
pub async fn get_fridge(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<SnapshotQuery>,
) -> AppResult<Json<FridgeSnapshot>> {
    validate_query(&query)?;
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::MissingToken)?;

    let records = state.inventory_api.fetch_inventory(bearer.token()).await?;
    Ok(Json(state.fridge.snapshot(&records, query.max_days)))
}

/// Category label table for a language
pub async fn get_category_labels(
    State(state): State<AppState>,
    Query(query): Query<CategoriesQuery>,
) -> AppResult<Json<CategoryLabels>> {
    let language = match query.lang.as_deref() {
        Some(code) => Some(Language::from_code(code).ok_or_else(|| AppError::Validation {
            field: "lang".to_string(),
            message: format!("Unsupported language '{}'; use ru, pl or en", code),
            message_pl: format!("Nieobsługiwany język '{}'; użyj ru, pl lub en", code),
        })?),
        None => None,
    };
    Ok(Json(state.fridge.category_labels(language)))
}

fn validate_query(query: &SnapshotQuery) -> AppResult<()> {
    query.validate().map_err(|_| AppError::Validation {
        field: "max_days".to_string(),
        message: "max_days must be between 0 and 30".to_string(),
        message_pl: "max_days musi mieścić się w zakresie od 0 do 30".to_string(),
    })
}
