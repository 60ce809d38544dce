//! Redirect store implementations.

pub mod memory_store;
pub mod s3_store;

pub use memory_store::InMemoryRedirectStore;
pub use s3_store::S3RedirectStore;
