//! Error types for the redirect registry.
//!
//! [`StoreError`] is produced at the [`RedirectStore`](crate::domain::repositories::RedirectStore)
//! boundary. [`RequestError`] is the taxonomy the
//! [`RequestHandler`](crate::application::services::RequestHandler) maps onto
//! status codes. Neither ever escapes the handler: every failure becomes a
//! [`RegistryResponse`](crate::domain::entities::RegistryResponse).

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("failed to put redirect object '{code}': {message}")]
    Put { code: String, message: String },

    #[error("failed to delete redirect object '{code}': {message}")]
    Delete { code: String, message: String },
}

impl StoreError {
    pub fn put(code: impl Into<String>, message: impl ToString) -> Self {
        Self::Put {
            code: code.into(),
            message: message.to_string(),
        }
    }

    pub fn delete(code: impl Into<String>, message: impl ToString) -> Self {
        Self::Delete {
            code: code.into(),
            message: message.to_string(),
        }
    }
}

/// A required payload field was missing, empty, or not a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("supply a URL")]
    MissingUrl,

    #[error("supply a code")]
    MissingCode,
}

/// Reasons a registry request does not complete with `201`.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("Forbidden")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Method Not Allowed")]
    MethodNotAllowed(String),

    #[error("Internal Server Error")]
    Backend(#[from] StoreError),
}

impl RequestError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::Validation(_) => 502,
            Self::MethodNotAllowed(_) => 405,
            Self::Backend(_) => 500,
        }
    }

    /// Whether the shared secret was accepted before this error occurred.
    pub fn passed_auth(&self) -> bool {
        !matches!(self, Self::Forbidden)
    }
}
