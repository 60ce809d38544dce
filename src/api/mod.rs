//! HTTP API layer for request/response handling.
//!
//! This layer is a thin front door: it extracts the verb and raw body, hands
//! them to the [`RequestHandler`](crate::application::services::RequestHandler),
//! and renders its response unchanged.
//!
//! # Modules
//!
//! - [`dto`] - Response rendering
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
