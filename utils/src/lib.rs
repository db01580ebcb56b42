//! Shared utilities for the NEM validator workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat};
