//! Mapping entity representing a persisted redirect.

/// A redirect from a short code to a target URL.
///
/// The code is the object key in the backend, so a stored code always resolves
/// to exactly one target. Mappings are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub target_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}

/// Result of a successful `put` against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingHandle {
    pub mapping: Mapping,
    /// Backend version tag of the stored object (the S3 `ETag`), if reported.
    pub version: Option<String>,
}

impl MappingHandle {
    pub fn new(mapping: Mapping, version: Option<String>) -> Self {
        Self { mapping, version }
    }

    pub fn code(&self) -> &str {
        &self.mapping.code
    }
}
