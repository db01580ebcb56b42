//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators of the validator are abstracted behind traits in
//! `nem-types`. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record how they were called
//!
//! Usage: swap the real address codec for a nullable in tests.

pub mod oracle;

pub use oracle::NullAddressOracle;
