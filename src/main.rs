//! VetClinic Web - Rust Implementation
//!
//! Web frontend for the VetClinic veterinary practice management suite.

use vetclinic_web::{api, config, ui};

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vetclinic_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting VetClinic web frontend v{}",
        env!("VETCLINIC_VERSION")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);
    match config.backend_url {
        Some(ref backend) => tracing::info!("Backend API at {}", backend),
        None => {
            tracing::warn!("No backend configured; data sections render their pending state")
        }
    }

    let port = config.port;
    let state = api::AppState::new(&config);

    // Build routes
    let app = Router::new()
        // Health check
        .route("/status", get(api::status_handler))
        // Web UI routes
        .route("/", get(ui::dashboard_page))
        .route("/appointments", get(ui::appointments_page))
        .route("/patients", get(ui::patients_page))
        .route("/inventory", get(ui::inventory_page))
        .route("/sales", get(ui::sales_page))
        .route("/reports", get(ui::reports_page))
        .route("/encoding", get(ui::encoding_page))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
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
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
