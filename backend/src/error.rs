//! Error handling for the fridge API
//!
//! Provides consistent error responses in English and Polish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fridge_shared::PayloadError;
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Upstream rejected credentials")]
    UpstreamUnauthorized,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_pl: String,
    },

    #[error("Invalid inventory payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    // External service errors
    #[error("Upstream request failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_pl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "MISSING_TOKEN".to_string(),
                    message_en: "A bearer token is required".to_string(),
                    message_pl: "Wymagany jest token uwierzytelniający".to_string(),
                    field: None,
                },
            ),
            AppError::UpstreamUnauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: "The inventory service rejected your credentials".to_string(),
                    message_pl: "Serwis magazynowy odrzucił dane logowania".to_string(),
                    field: None,
                },
            ),
            AppError::Validation {
                field,
                message,
                message_pl,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_pl: message_pl.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidPayload(err) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_PAYLOAD".to_string(),
                    message_en: err.to_string(),
                    message_pl: format!("Nieprawidłowe dane magazynu: {}", err),
                    field: None,
                },
            ),
            AppError::UpstreamUnavailable(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_UNAVAILABLE".to_string(),
                    message_en: "The inventory service is temporarily unavailable".to_string(),
                    message_pl: "Serwis magazynowy jest chwilowo niedostępny".to_string(),
                    field: None,
                },
            ),
            AppError::UpstreamStatus { status } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_ERROR".to_string(),
                    message_en: format!("The inventory service responded with {}", status),
                    message_pl: format!("Serwis magazynowy zwrócił status {}", status),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_pl: format!("Błąd konfiguracji: {}", msg),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingToken.status_and_detail().0, StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidPayload(PayloadError::MissingItems).status_and_detail().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpstreamStatus { status: 500 }.status_and_detail().0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Configuration("timeout".to_string()).status_and_detail().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_detail_carries_field() {
        let err = AppError::Validation {
            field: "max_days".to_string(),
            message: "too large".to_string(),
            message_pl: "za duże".to_string(),
        };
        let (_, detail) = err.status_and_detail();
        assert_eq!(detail.code, "VALIDATION_ERROR");
        assert_eq!(detail.field.as_deref(), Some("max_days"));
    }
}
