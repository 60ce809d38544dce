//! Outbound registry response.

use serde::Serialize;
use std::collections::BTreeMap;

use super::request::Action;
use crate::error::RequestError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// The single response produced for every registry request.
///
/// Serializes to the `{"statusCode", "body", "headers"}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl RegistryResponse {
    fn new(status_code: u16, body: impl Into<String>, authorized_for: Option<&Action>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        if let Some(header) = authorized_for.and_then(Action::authorization_header) {
            headers.insert(header.to_string(), "true".to_string());
        }

        Self {
            status_code,
            body: body.into(),
            headers,
        }
    }

    /// `201` carrying the created or deleted code.
    pub fn created(action: &Action, code: impl Into<String>) -> Self {
        Self::new(201, code, Some(action))
    }

    /// Error response; the authorization flag is set only if the gate passed.
    pub fn rejected(action: &Action, err: &RequestError) -> Self {
        let authorized_for = err.passed_auth().then_some(action);
        Self::new(err.status_code(), err.to_string(), authorized_for)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, ValidationError};

    #[test]
    fn test_created_response() {
        let response = RegistryResponse::created(&Action::Create, "ab12XY");

        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, "ab12XY");
        assert!(response.is_success());
        assert_eq!(response.header(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(response.header("upload_authorized"), Some("true"));
        assert_eq!(response.header("delete_authorized"), None);
    }

    #[test]
    fn test_forbidden_has_no_authorization_flag() {
        let response = RegistryResponse::rejected(&Action::Delete, &RequestError::Forbidden);

        assert_eq!(response.status_code, 403);
        assert_eq!(response.body, "Forbidden");
        assert_eq!(response.headers.len(), 1);
    }

    #[test]
    fn test_validation_keeps_authorization_flag() {
        let response = RegistryResponse::rejected(
            &Action::Delete,
            &RequestError::from(ValidationError::MissingCode),
        );

        assert_eq!(response.status_code, 502);
        assert_eq!(response.body, "supply a code");
        assert_eq!(response.header("delete_authorized"), Some("true"));
    }

    #[test]
    fn test_method_not_allowed_has_only_content_type() {
        let action = Action::Unsupported("PATCH".to_string());
        let response =
            RegistryResponse::rejected(&action, &RequestError::MethodNotAllowed("PATCH".into()));

        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, "Method Not Allowed");
        assert_eq!(response.headers.len(), 1);
    }

    #[test]
    fn test_backend_error_response() {
        let response = RegistryResponse::rejected(
            &Action::Create,
            &RequestError::from(StoreError::put("ab12XY", "SlowDown")),
        );

        assert_eq!(response.status_code, 500);
        assert!(!response.body.contains("SlowDown"));
        assert_eq!(response.header("upload_authorized"), Some("true"));
    }

    #[test]
    fn test_envelope_serialization() {
        let response = RegistryResponse::created(&Action::Create, "ab12XY");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["body"], "ab12XY");
        assert_eq!(json["headers"]["Content-Type"], "application/json");
        assert_eq!(json["headers"]["upload_authorized"], "true");
    }
}
