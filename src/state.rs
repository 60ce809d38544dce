use std::sync::Arc;

use crate::application::services::RequestHandler;

/// Shared state injected into every handler.
///
/// Holds only immutable, concurrently usable parts: the request handler owns
/// the configured secret and the store client.
#[derive(Clone)]
pub struct AppState {
    pub request_handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(request_handler: Arc<RequestHandler>) -> Self {
        Self { request_handler }
    }
}
