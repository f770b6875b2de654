//! Shared utilities for Gliesereum crates.

pub mod logging;

pub use logging::{init_logging, LogFormat};
