//! Shared utilities for hawkeye
//!
//! Logging setup and application configuration used by the binaries in this
//! workspace.

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use logging::{init_tracing, init_tracing_with};
