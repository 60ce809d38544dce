//! # Redirect Registry
//!
//! A shared-secret URL redirect registry. Clients submit a long URL and receive
//! a six-character code; the mapping is stored as a public website-redirect
//! object in an S3 bucket, so visiting `<bucket website>/<code>` redirects to the
//! URL. Clients holding the secret can also revoke a code.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mappings, requests/responses, the store trait
//! - **Application Layer** ([`application`]) - [`AuthGate`](application::services::AuthGate)
//!   and the [`RequestHandler`](application::services::RequestHandler) state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - S3 and in-memory stores
//! - **API Layer** ([`api`]) - HTTP front door, health check, tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export KEY="s3cr3t"
//! export BUCKET="my-redirect-bucket"
//!
//! cargo run
//!
//! curl -X PUT localhost:3000/ -d '{"key":"s3cr3t","redirectTo":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{RequestError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthGate, RequestHandler};
    pub use crate::domain::entities::{Action, Mapping, RegistryRequest, RegistryResponse};
    pub use crate::domain::repositories::RedirectStore;
    pub use crate::error::{RequestError, StoreError};
    pub use crate::infrastructure::storage::InMemoryRedirectStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
