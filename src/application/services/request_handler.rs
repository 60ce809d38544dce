//! Orchestration of create and delete requests.

use std::sync::Arc;

use crate::application::services::AuthGate;
use crate::domain::entities::{
    CreatePayload, DeletePayload, Payload, RegistryRequest, RegistryResponse,
};
use crate::domain::repositories::RedirectStore;
use crate::error::{RequestError, StoreError};
use crate::utils::code_generator::CodeGenerator;

/// Runs a registry request through the gate, validation, code generation and
/// the backend, and always produces exactly one [`RegistryResponse`].
///
/// # Flow
///
/// 1. Reject with `403` unless the shared secret matches
/// 2. Parse the payload for the action (`502` if the field is bad, `405` for
///    an unknown verb)
/// 3. Create: generate a code and `put` it; Delete: `delete` the code
/// 4. Respond `201` with the code
///
/// Backend failures are logged and, unless surfacing is enabled, still
/// answered with `201`.
pub struct RequestHandler {
    auth_gate: AuthGate,
    code_generator: Arc<dyn CodeGenerator>,
    store: Arc<dyn RedirectStore>,
    surface_backend_errors: bool,
}

impl RequestHandler {
    /// Creates a handler that swallows backend failures.
    pub fn new(
        auth_gate: AuthGate,
        code_generator: Arc<dyn CodeGenerator>,
        store: Arc<dyn RedirectStore>,
    ) -> Self {
        Self {
            auth_gate,
            code_generator,
            store,
            surface_backend_errors: false,
        }
    }

    /// Reports backend failures as `500` instead of `201` when `enabled`.
    pub fn with_surfaced_backend_errors(mut self, enabled: bool) -> Self {
        self.surface_backend_errors = enabled;
        self
    }

    /// The backend this handler writes to.
    pub fn store(&self) -> &Arc<dyn RedirectStore> {
        &self.store
    }

    /// Handles one request. Never fails: every error becomes a response.
    #[tracing::instrument(skip_all, fields(action = request.action.as_str()))]
    pub async fn handle(&self, request: RegistryRequest) -> RegistryResponse {
        match self.process(&request).await {
            Ok(code) => {
                tracing::info!(%code, "request completed");
                RegistryResponse::created(&request.action, code)
            }
            Err(err) => {
                match &err {
                    RequestError::Forbidden => tracing::warn!("rejected: shared secret mismatch"),
                    RequestError::Backend(source) => {
                        tracing::error!(error = %source, "rejected: backend failure")
                    }
                    other => tracing::info!(status = other.status_code(), "rejected: {}", other),
                }
                RegistryResponse::rejected(&request.action, &err)
            }
        }
    }

    async fn process(&self, request: &RegistryRequest) -> Result<String, RequestError> {
        if !self.auth_gate.authorize(&request.auth_secret) {
            return Err(RequestError::Forbidden);
        }

        match request.payload()? {
            Payload::Create(payload) => self.create(payload).await,
            Payload::Delete(payload) => self.delete(payload).await,
        }
    }

    async fn create(&self, payload: CreatePayload) -> Result<String, RequestError> {
        let code = self.code_generator.generate();

        match self.store.put(&code, &payload.target_url).await {
            Ok(handle) => {
                tracing::debug!(code = handle.code(), version = ?handle.version, "mapping stored")
            }
            Err(err) => self.backend_failed(err)?,
        }

        Ok(code)
    }

    async fn delete(&self, payload: DeletePayload) -> Result<String, RequestError> {
        match self.store.delete(&payload.code).await {
            Ok(()) => tracing::debug!(code = %payload.code, "mapping removed"),
            Err(err) => self.backend_failed(err)?,
        }

        Ok(payload.code)
    }

    fn backend_failed(&self, err: StoreError) -> Result<(), RequestError> {
        if self.surface_backend_errors {
            return Err(err.into());
        }

        tracing::warn!(error = %err, "backend call failed; responding as if it succeeded");
        Ok(())
    }
}
