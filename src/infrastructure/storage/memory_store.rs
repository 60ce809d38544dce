//! In-memory redirect store for local development and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::{Mapping, MappingHandle};
use crate::domain::repositories::RedirectStore;
use crate::error::StoreError;

/// Redirect store keeping mappings in a sharded concurrent map.
///
/// Follows the same contract as the S3 store: `put` overwrites, `delete` of a
/// missing code succeeds. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRedirectStore {
    storage: DashMap<String, String>,
}

impl InMemoryRedirectStore {
    pub fn new() -> Self {
        debug!("Using InMemoryRedirectStore (mappings are not persisted)");
        Self {
            storage: DashMap::new(),
        }
    }

    /// Returns the target URL stored under `code`.
    pub fn get(&self, code: &str) -> Option<String> {
        self.storage.get(code).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl RedirectStore for InMemoryRedirectStore {
    async fn put(&self, code: &str, target_url: &str) -> Result<MappingHandle, StoreError> {
        self.storage.insert(code.to_owned(), target_url.to_owned());
        debug!("Memory PUT: {} -> {}", code, target_url);
        Ok(MappingHandle::new(Mapping::new(code, target_url), None))
    }

    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        let removed = self.storage.remove(code).is_some();
        debug!("Memory DELETE: {} (existed: {})", code, removed);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
