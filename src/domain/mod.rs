//! Domain layer containing the registry's data model and repository contract.
//!
//! - [`entities`] - Mappings, requests, and responses
//! - [`repositories`] - The [`repositories::RedirectStore`] backend trait
//!
//! The domain layer has no dependencies on the HTTP surface or on any storage SDK.

pub mod entities;
pub mod repositories;
