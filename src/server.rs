//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, request handler wiring, and Axum server lifecycle.

use crate::application::services::{AuthGate, RequestHandler};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::RedirectStore;
use crate::infrastructure::storage::{InMemoryRedirectStore, S3RedirectStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the configured store.
pub async fn build_store(config: &Config) -> Arc<dyn RedirectStore> {
    match config.store_backend {
        StoreBackend::S3 => Arc::new(S3RedirectStore::connect(config).await),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Arc::new(InMemoryRedirectStore::new())
        }
    }
}

/// Wires the gate, generator and store into a [`RequestHandler`].
pub async fn build_request_handler(config: &Config) -> RequestHandler {
    let store = build_store(config).await;

    RequestHandler::new(
        AuthGate::new(config.shared_secret.clone()),
        Arc::new(RandomCodeGenerator::new()),
        store,
    )
    .with_surfaced_backend_errors(config.surface_backend_errors)
}

/// Runs the HTTP server with the given configuration.
///
/// Stops accepting connections on SIGINT/SIGTERM and lets in-flight requests
/// finish.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let request_handler = build_request_handler(&config).await;
    let state = AppState::new(Arc::new(request_handler));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
