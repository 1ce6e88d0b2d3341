//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - JSON-formatted file logs with rotation
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use cosmos_quickstart::logging::init_logging;
//! use cosmos_quickstart::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cosmos_quickstart::log_error_with_context;
/// use cosmos_quickstart::domain::QuickstartError;
///
/// let error = QuickstartError::Configuration("COSMOS_ENDPOINT is not set".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
