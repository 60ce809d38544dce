//! API route configuration.

use crate::api::handlers::{health_handler, registry_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{any, get},
};

/// Registry and health routes.
///
/// # Endpoints
///
/// - `ANY /`       - Create (`PUT`) or delete (`DELETE`) a redirect; other verbs get `405`
/// - `GET /health` - Store health probe
pub fn registry_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(registry_handler))
        .route("/health", get(health_handler))
}
