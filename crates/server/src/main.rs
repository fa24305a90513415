//! bridge-server: cohort extraction bridge binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bridge_server::config::Config;
use bridge_server::torch::TorchClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env().expect("Invalid configuration"));

    // Log startup info
    if config.basic_auth.is_some() {
        tracing::info!("Basic authentication towards torch enabled");
    } else {
        tracing::warn!("Basic authentication towards torch disabled (TORCH_BASIC_AUTH is not \"True\")");
    }
    if !config.tls_verify {
        tracing::warn!("TLS certificate verification disabled for outbound calls");
    }
    tracing::info!(
        torch = %config.torch_base_url,
        proxy = %config.proxy_base_url,
        group_reference = %config.group_reference,
        "Torch target configured"
    );

    // Build torch client and application
    let torch = TorchClient::new(&config).expect("Failed to build torch HTTP client");
    let app = bridge_server::build_app(torch, config.clone());

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting torch bridge on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
