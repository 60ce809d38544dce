//! Application layer services implementing the registry flow.
//!
//! # Available Services
//!
//! - [`services::auth_gate::AuthGate`] - Shared-secret check
//! - [`services::request_handler::RequestHandler`] - Create/delete orchestration

pub mod services;
