mod extraction;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Build the cohort extraction routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/data/", post(extraction::submit))
        .route("/api/data/{location}", get(extraction::status))
}
