//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

const RESOURCE_FILES: [&str; 3] = ["jsonschema.json", "torchQuery.json", "torchRequestBody.json"];

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Verify the resource documents load and report server health
pub async fn check(State(state): State<AppState>) -> impl IntoResponse {
    for file in RESOURCE_FILES {
        if let Err(e) = bridge_core::templates::load(&state.config.resource_dir.join(file)) {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    reason: Some(e.to_string()),
                }),
            );
        }
    }

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            reason: None,
        }),
    )
}
