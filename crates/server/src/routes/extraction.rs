//! Cohort extraction HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Value as JsonValue, json};

use bridge_core::{RequestBuilder, rehost};

use crate::AppState;
use crate::error::AppError;
use crate::torch::{PollOutcome, SubmitOutcome};

/// POST /api/data/ - Validate a cohort definition and submit it to torch
///
/// Answers with the polling location on acceptance. A torch rejection is
/// relayed as the raw numeric status in the response body, not as an error.
pub async fn submit(
    State(state): State<AppState>,
    Json(cohort): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let builder = RequestBuilder::new(
        state.config.resource_dir.clone(),
        state.config.group_reference.clone(),
    );
    let envelope = builder.build(cohort)?;

    match state.torch.submit(&envelope).await? {
        SubmitOutcome::Accepted(location) => {
            tracing::info!(location = %location, "extraction request accepted");
            Ok(Json(JsonValue::String(location)))
        }
        SubmitOutcome::Rejected(status) => Ok(Json(JsonValue::from(status))),
    }
}

/// GET /api/data/{location} - Poll an extraction job and collect patient ids
///
/// A finished job answers with the identifiers of every produced result
/// file, concatenated in the order torch listed the files.
pub async fn status(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match state.torch.poll(&location).await? {
        PollOutcome::Complete(entries) => {
            let urls = rehost::rehost_urls(
                &entries,
                &state.config.torch_base_url,
                &state.config.proxy_base_url,
            );
            let mut ids = Vec::new();
            for url in &urls {
                ids.extend(state.torch.fetch_patient_ids(url).await?);
            }
            tracing::info!(
                files = urls.len(),
                ids = ids.len(),
                "extraction results collected"
            );
            Ok(Json(json!(ids)))
        }
        PollOutcome::Processing => Ok(Json(json!({
            "output": "request still processing on torch side"
        }))),
        PollOutcome::Failed(status) => Ok(Json(json!({
            "error code": status.to_string()
        }))),
    }
}
