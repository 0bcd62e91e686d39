//! Error handling for the Certificate Hub
//!
//! Every failure reaching the HTTP layer is rendered as
//! `{ "error": { "code", "message", "field"? } }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{FeedValidationError, SynthesisError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Generation errors
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("Validation error: {0}")]
    Validation(String),

    // Feed errors
    #[error("Certificate feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error(transparent)]
    FeedSchema(#[from] FeedValidationError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Export errors
    #[error("Export error: {0}")]
    Export(String),

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
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_columns: Vec<String>,
}

impl ErrorDetail {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
            missing_columns: Vec::new(),
        }
    }
}

impl AppError {
    /// HTTP status and body for this error
    pub fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Synthesis(SynthesisError::InvalidTemplate { field }) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("INVALID_TEMPLATE", self.to_string())
                },
            ),
            AppError::Synthesis(SynthesisError::InvalidRecipientLine { .. })
            | AppError::Synthesis(SynthesisError::NoRecipients) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some("recipients".to_string()),
                    ..ErrorDetail::new("INVALID_RECIPIENT_LINE", self.to_string())
                },
            ),
            AppError::Synthesis(SynthesisError::IdCollision { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("ID_COLLISION", self.to_string()),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", msg.clone()),
            ),
            AppError::FeedUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail::new("FEED_UNAVAILABLE", self.to_string()),
            ),
            AppError::FeedSchema(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    missing_columns: err.missing_columns(),
                    ..ErrorDetail::new("FEED_SCHEMA_INVALID", err.to_string())
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::Export(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("EXPORT_ERROR", msg.clone()),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("CONFIGURATION_ERROR", format!("Configuration error: {}", msg)),
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

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Column;

    #[test]
    fn test_recipient_errors_are_bad_requests() {
        let err = AppError::from(SynthesisError::InvalidRecipientLine {
            line: 2,
            reason: "email is required".to_string(),
        });
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.code, "INVALID_RECIPIENT_LINE");
        assert_eq!(detail.message, "Invalid recipient on line 2: email is required");
    }

    #[test]
    fn test_feed_errors_are_distinguishable() {
        let (status, detail) =
            AppError::FeedUnavailable("timeout".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(detail.code, "FEED_UNAVAILABLE");

        let err = AppError::from(FeedValidationError::MissingColumns(vec![Column::IssuerName]));
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail.missing_columns, vec!["Issuer Name"]);
    }

    #[test]
    fn test_not_found() {
        let (status, detail) =
            AppError::NotFound("Certificate CERT-1".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail.message, "Certificate CERT-1 not found");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let (status, detail) =
            AppError::Validation("missing field `template`".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.code, "VALIDATION_ERROR");
    }
}
