//! Domain error types
//!
//! This module defines the error types of the crate:
//!
//! - [`UnwrapError`] describes a contract violation, such as unwrapping an
//!   `Err` outcome. The panicking extractors render it as their panic message.
//! - [`CapturedPanic`] is the diagnostic of a panic caught by an adapter.
//! - [`ResultantError`] covers the ambient layers (configuration loading,
//!   logging setup, report serialization).
//!
//! Modeled failures never use `UnwrapError` or `ResultantError`; they live in
//! [`Outcome::Err`](crate::domain::Outcome::Err).

use crate::domain::origin::Origin;
use thiserror::Error;

/// Contract violation raised by the extraction operations
///
/// The variants carrying an [`Origin`] expose it through
/// [`std::error::Error::source`], so the full causal chain of the failed
/// outcome is part of the report.
#[derive(Debug, Error)]
pub enum UnwrapError {
    /// `unwrap()` was called on an `Err`
    #[error("cannot unwrap an Err")]
    Err {
        /// Diagnostic of the failed outcome
        #[source]
        origin: Origin,
    },

    /// `unwrap_err()` was called on an `Ok`
    #[error("cannot unwrap an Ok as an Err")]
    Ok,

    /// `expect()` was called on an `Err`
    #[error("{message}")]
    Expect {
        /// Caller-supplied message
        message: String,
        /// Diagnostic of the failed outcome
        #[source]
        origin: Origin,
    },

    /// `expect_err()` was called on an `Ok`
    #[error("{message}")]
    ExpectErr {
        /// Caller-supplied message
        message: String,
    },
}

impl UnwrapError {
    /// Returns the origin of the failed outcome, if this violation has one
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            UnwrapError::Err { origin } | UnwrapError::Expect { origin, .. } => Some(origin),
            UnwrapError::Ok | UnwrapError::ExpectErr { .. } => None,
        }
    }

    /// Renders the error together with its source chain
    ///
    /// This is the text the panicking extractors report.
    pub fn render(self) -> String {
        format!("{:#}", anyhow::Error::new(self))
    }
}

/// Diagnostic of a panic caught by an adapter
///
/// The message is the panic message, or a fixed text for payloads that carry
/// none.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CapturedPanic {
    message: String,
}

impl CapturedPanic {
    /// Creates the diagnostic for a panic with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type of the ambient layers
#[derive(Debug, Error)]
pub enum ResultantError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ResultantError {
    fn from(err: std::io::Error) -> Self {
        ResultantError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ResultantError {
    fn from(err: serde_json::Error) -> Self {
        ResultantError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ResultantError {
    fn from(err: toml::de::Error) -> Self {
        ResultantError::Configuration(format!("TOML parse error: {err}"))
    }
}
