//! HTTP request handlers for API endpoints.

pub mod health;
pub mod registry;

pub use health::health_handler;
pub use registry::registry_handler;
