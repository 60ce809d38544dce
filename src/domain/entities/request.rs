//! Inbound registry request and its typed payloads.
//!
//! The front door hands over the transport verb and the raw JSON body. The
//! secret is lifted out eagerly so the gate can run first; the payload is
//! parsed only after authorization, according to the [`Action`].

use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value, json};
use std::fmt;

use crate::error::{RequestError, ValidationError};

/// What the caller asked the registry to do, derived from the transport verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `PUT`: store a new mapping under a generated code.
    Create,
    /// `DELETE`: remove the mapping for a code.
    Delete,
    /// Any other verb, kept for logging.
    Unsupported(String),
}

impl Action {
    /// Maps an HTTP method name onto an action. Matching is exact.
    pub fn from_method(method: &str) -> Self {
        match method {
            "PUT" => Self::Create,
            "DELETE" => Self::Delete,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Name of the header acknowledging that the gate passed for this action.
    pub fn authorization_header(&self) -> Option<&'static str> {
        match self {
            Self::Create => Some("upload_authorized"),
            Self::Delete => Some("delete_authorized"),
            Self::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Unsupported(verb) => verb,
        }
    }
}

/// Body of a create request: `{"redirectTo": "<url>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePayload {
    #[serde(rename = "redirectTo", deserialize_with = "non_empty_string")]
    pub target_url: String,
}

/// Body of a delete request: `{"redirectFrom": "<code>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletePayload {
    #[serde(rename = "redirectFrom", deserialize_with = "non_empty_string")]
    pub code: String,
}

/// Payload after successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Create(CreatePayload),
    Delete(DeletePayload),
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::invalid_length(0, &"a non-empty string"));
    }
    Ok(value)
}

/// A mutating request as delivered by the front door.
#[derive(Clone)]
pub struct RegistryRequest {
    pub action: Action,
    pub auth_secret: String,
    body: Value,
}

impl fmt::Debug for RegistryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryRequest")
            .field("action", &self.action)
            .field("auth_secret", &"***")
            .finish_non_exhaustive()
    }
}

impl RegistryRequest {
    /// Builds a request from the verb and raw body bytes.
    ///
    /// A body that is not JSON is treated as an empty object, and a missing or
    /// non-string `key` as an empty secret; both fail authorization downstream.
    pub fn from_body(action: Action, raw: &[u8]) -> Self {
        let body = serde_json::from_slice::<Value>(raw)
            .unwrap_or_else(|_| Value::Object(Map::new()));
        Self::from_value(action, body)
    }

    pub fn from_value(action: Action, body: Value) -> Self {
        let auth_secret = body
            .get("key")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            action,
            auth_secret,
            body,
        }
    }

    /// Convenience constructor for a create request.
    pub fn create(secret: &str, target_url: &str) -> Self {
        Self::from_value(
            Action::Create,
            json!({ "key": secret, "redirectTo": target_url }),
        )
    }

    /// Convenience constructor for a delete request.
    pub fn delete(secret: &str, code: &str) -> Self {
        Self::from_value(
            Action::Delete,
            json!({ "key": secret, "redirectFrom": code }),
        )
    }

    /// Parses the body into the payload the action requires.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MethodNotAllowed`] for an unsupported action
    /// - [`ValidationError::MissingUrl`] / [`ValidationError::MissingCode`] when
    ///   the required field is absent, empty, or not a string
    pub fn payload(&self) -> Result<Payload, RequestError> {
        match &self.action {
            Action::Create => CreatePayload::deserialize(&self.body)
                .map(Payload::Create)
                .map_err(|_| ValidationError::MissingUrl.into()),
            Action::Delete => DeletePayload::deserialize(&self.body)
                .map(Payload::Delete)
                .map_err(|_| ValidationError::MissingCode.into()),
            Action::Unsupported(verb) => Err(RequestError::MethodNotAllowed(verb.clone())),
        }
    }
}
