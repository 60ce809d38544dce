//! HTTP middleware for request processing.
//!
//! Authorization is not a middleware here: the shared secret travels in the
//! JSON body and is checked by the core handler.

pub mod tracing;
