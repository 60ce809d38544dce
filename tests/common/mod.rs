#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use redirect_registry::prelude::*;
use redirect_registry::routes::app_router;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SECRET: &str = "s3cr3t";

/// Hands out the given codes in order, then repeats the last one.
pub struct FixedCodeGenerator {
    codes: Vec<&'static str>,
    next: AtomicUsize,
}

impl FixedCodeGenerator {
    pub fn new(codes: &[&'static str]) -> Self {
        Self {
            codes: codes.to_vec(),
            next: AtomicUsize::new(0),
        }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes[index.min(self.codes.len() - 1)].to_string()
    }
}

pub fn create_test_state(
    store: Arc<InMemoryRedirectStore>,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    let handler = RequestHandler::new(AuthGate::new(SECRET), generator, store);
    AppState::new(Arc::new(handler))
}

/// Test server over the full application stack (tracing, path normalization).
pub fn create_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    TestServer::new(app).unwrap()
}

/// Server over a fresh in-memory store with the random generator.
pub fn random_server() -> (TestServer, Arc<InMemoryRedirectStore>) {
    let store = Arc::new(InMemoryRedirectStore::new());
    let state = create_test_state(store.clone(), Arc::new(RandomCodeGenerator::new()));
    (create_server(state), store)
}

/// Server over a fresh in-memory store that issues `codes` in order.
pub fn fixed_server(codes: &[&'static str]) -> (TestServer, Arc<InMemoryRedirectStore>) {
    let store = Arc::new(InMemoryRedirectStore::new());
    let state = create_test_state(store.clone(), Arc::new(FixedCodeGenerator::new(codes)));
    (create_server(state), store)
}
