//! Test utilities shared across the rtmap workspace
//!
//! This crate provides common testing infrastructure including:
//! - `.netrc` isolation with a temporary HOME directory ([`NetrcGuard`])
//! - Scoped environment variable overrides ([`EnvVarGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use netrc::NetrcGuard;
