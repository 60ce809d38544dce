//! Repository trait for the redirect-object backend.

use crate::domain::entities::MappingHandle;
use crate::error::StoreError;
use async_trait::async_trait;

/// Key-value backend holding one redirect object per code.
///
/// Implementations perform exactly one backend call per operation and never
/// retry. Failures are logged at the boundary and returned as [`StoreError`].
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::S3RedirectStore`] - S3 website-redirect objects
/// - [`crate::infrastructure::storage::InMemoryRedirectStore`] - local development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectStore: Send + Sync {
    /// Stores a publicly readable object under `code` that redirects to `target_url`.
    ///
    /// An existing object under the same code is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Put`] if the backend call fails.
    async fn put(&self, code: &str, target_url: &str) -> Result<MappingHandle, StoreError>;

    /// Removes the object under `code`.
    ///
    /// Deleting a code that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Delete`] if the backend call fails.
    async fn delete(&self, code: &str) -> Result<(), StoreError>;

    /// Returns whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
