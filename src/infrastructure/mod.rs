//! Infrastructure layer for external integrations.
//!
//! This layer implements the [`RedirectStore`](crate::domain::repositories::RedirectStore)
//! contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - S3 and in-memory redirect stores

pub mod storage;
