//! Configuration management for resultant.
//!
//! The container itself needs almost no configuration; this module covers the
//! diagnostics defaults and the logging setup of programs built on it.
//!
//! # Overview
//!
//! - TOML configuration files with `${VAR_NAME}` substitution
//! - `.env` loading and `RESULTANT_*` environment overrides
//! - Default values for every setting
//! - Validation on load and on install
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resultant::config::{install, load_config};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("resultant.toml")?;
//! println!("Log level: {}", config.logging.level);
//!
//! // Make the diagnostics settings visible to every outcome
//! install(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [diagnostics]
//! default_message = "Unspecified error"
//! log_captures = true
//! quiet_panics = false
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! file_enabled = false
//! file_path = "./logs"
//! file_rotation = "daily"
//! ```
//!
//! # Configuration Structure
//!
//! - [`DiagnosticsConfig`] - Synthesized origin message, capture events, quiet panic hook
//! - [`LoggingConfig`] - Level, console format, optional rolling log file

pub mod global;
pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use global::{current, install};
pub use loader::load_config;
pub use schema::{DiagnosticsConfig, LogFormat, LoggingConfig, ResultantConfig};
