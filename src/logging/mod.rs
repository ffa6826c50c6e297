//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Pretty or JSON console output
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! The adapters report every captured failure through
//! [`log_captured_failure!`](crate::log_captured_failure) at debug level.
//!
//! # Example
//!
//! ```no_run
//! use resultant::logging::init_logging;
//! use resultant::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a failure captured by an adapter
///
/// Emits nothing when `diagnostics.log_captures` is disabled in the installed
/// configuration.
///
/// # Example
///
/// ```no_run
/// use resultant::log_captured_failure;
/// use resultant::Origin;
///
/// let origin = Origin::msg("connection reset");
/// log_captured_failure!("from_fn", origin);
/// ```
#[macro_export]
macro_rules! log_captured_failure {
    ($adapter:expr, $origin:expr) => {
        if $crate::config::current().diagnostics.log_captures {
            tracing::debug!(
                adapter = $adapter,
                origin = %$origin,
                "Captured failure"
            );
        }
    };
}

/// Log a failure with context
///
/// # Example
///
/// ```no_run
/// use resultant::log_failure;
/// use resultant::{Failure, Origin};
///
/// let failure = Failure::with_origin("QUOTA", Origin::msg("quota exceeded"));
/// log_failure!(&failure, "Failed to reserve capacity");
/// ```
#[macro_export]
macro_rules! log_failure {
    ($failure:expr, $context:expr) => {
        tracing::error!(
            err_value = ?$failure.err_value(),
            origin = %$failure.origin(),
            context = $context,
            "Failure occurred"
        );
    };
}
