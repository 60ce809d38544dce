//! Utility functions for code generation.
//!
//! - [`code_generator`] - Short code generation

pub mod code_generator;
