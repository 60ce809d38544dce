//! Handler for the registry endpoint.

use axum::{body::Bytes, extract::State, http::Method};

use crate::domain::entities::{Action, RegistryRequest, RegistryResponse};
use crate::state::AppState;

/// Creates or deletes a redirect depending on the HTTP method.
///
/// # Endpoint
///
/// `PUT /` or `DELETE /` (any other method is answered by the core with `405`)
///
/// # Request Body
///
/// ```json
/// { "key": "<shared secret>", "redirectTo": "https://example.com" }   // PUT
/// { "key": "<shared secret>", "redirectFrom": "ab12XY" }              // DELETE
/// ```
///
/// # Response Codes
///
/// - **201 Created**: body is the new (or deleted) code
/// - **403 Forbidden**: wrong or missing `key`
/// - **405 Method Not Allowed**: verb other than `PUT`/`DELETE`
/// - **502 Bad Gateway**: `redirectTo` / `redirectFrom` missing, empty, or not a string
pub async fn registry_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> RegistryResponse {
    let request = RegistryRequest::from_body(Action::from_method(method.as_str()), &body);
    state.request_handler.handle(request).await
}
