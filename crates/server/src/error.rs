//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use bridge_core::BridgeError;

use crate::torch::TorchError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<BridgeError> for AppError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Validation(message) => {
                AppError::BadRequest(format!("Invalid JSON: {}", message))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<TorchError> for AppError {
    fn from(err: TorchError) -> Self {
        AppError::Upstream(err.to_string())
    }
}
