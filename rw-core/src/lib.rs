//! RelayWarden Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API client crate:
//! - Client configuration (base URL, token, scope, retry and timeout settings)
//! - The error taxonomy every API call resolves into
//! - Structured logging with tracing
//! - Common constants (defaults, header names, well-known error codes)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, LoggingConfig};
pub use error::{RwError, RwResult};
pub use logging::{init_console_logging, init_logging};
