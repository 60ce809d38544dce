//! Core domain entities representing the registry data model.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A persisted code → URL redirect
//! - [`MappingHandle`] - What the backend reports after storing a mapping
//! - [`RegistryRequest`] - A mutating request, with its [`Action`] and typed [`Payload`]
//! - [`RegistryResponse`] - The status/body/headers envelope returned for every request
//!
//! Requests and responses are transient: they live for a single invocation.

pub mod mapping;
pub mod request;
pub mod response;

pub use mapping::{Mapping, MappingHandle};
pub use request::{Action, CreatePayload, DeletePayload, Payload, RegistryRequest};
pub use response::RegistryResponse;
