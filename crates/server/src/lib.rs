//! bridge-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod routes;
pub mod torch;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use torch::TorchClient;

/// Shared request state: the process configuration and the torch client.
///
/// Config is read-only after startup; the reqwest client clones cheaply.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub torch: TorchClient,
}

/// Build the full application router.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(torch: TorchClient, config: Arc<Config>) -> Router {
    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState { config, torch };

    Router::new()
        .route("/health", get(routes::health::check))
        .merge(routes::api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
