use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::locator::LocateError;
use crate::message::NoMessageFound;
use crate::registry::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not enough satellite data")]
    NotEnoughData,

    #[error("Location error: {0}")]
    Locate(#[from] LocateError),

    #[error("Message error: {0}")]
    Message(#[from] NoMessageFound),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotEnoughData => (
                StatusCode::NOT_FOUND,
                "NOT_ENOUGH_DATA",
                "Not enough satellite data".to_string(),
            ),
            AppError::Locate(e) => {
                tracing::warn!("Location rejected: {e}");
                (
                    StatusCode::NOT_FOUND,
                    "INCOHERENT_DATA",
                    "Satellite data is insufficient or incoherent".to_string(),
                )
            }
            AppError::Message(e) => {
                tracing::warn!("Message rejected: {e}");
                (
                    StatusCode::NOT_FOUND,
                    "MESSAGE_UNDECODABLE",
                    "Could not decode message".to_string(),
                )
            }
            AppError::Store(StoreError::NotFound(name)) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Satellite '{name}' not found"),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
