//! Shared-secret authorization for mutating requests.

use std::fmt;
use subtle::ConstantTimeEq;

/// Compares a request's secret against the process-wide configured secret.
///
/// The secret is fixed at construction and never changes, so a single gate can
/// be shared across concurrent requests without synchronization.
#[derive(Clone)]
pub struct AuthGate {
    secret: String,
}

impl AuthGate {
    /// Creates a gate for the configured secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Returns true only if `supplied` exactly matches the configured secret.
    ///
    /// The comparison runs in constant time for equal-length inputs.
    pub fn authorize(&self, supplied: &str) -> bool {
        supplied.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate").field("secret", &"***").finish()
    }
}
