//! Data Transfer Objects for API responses.
//!
//! The registry endpoint's request body is parsed by the domain layer
//! ([`crate::domain::entities::RegistryRequest`]); this module only renders
//! responses.

pub mod health;
pub mod registry;
