//! Repository trait definitions for the domain layer.
//!
//! The registry has a single repository: the [`RedirectStore`] that persists
//! code → URL redirects. Concrete stores live in `crate::infrastructure::storage`,
//! and a `mockall` mock is generated for unit tests.

pub mod redirect_store;

pub use redirect_store::RedirectStore;

#[cfg(test)]
pub use redirect_store::MockRedirectStore;
