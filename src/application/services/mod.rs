//! Business logic services for the application layer.

pub mod auth_gate;
pub mod request_handler;

pub use auth_gate::AuthGate;
pub use request_handler::RequestHandler;
