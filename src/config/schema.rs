//! Configuration schema types
//!
//! This module defines the configuration structure for resultant.

use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional in the file and falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResultantConfig {
    /// Diagnostic settings for failed outcomes
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ResultantConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.diagnostics.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Diagnostic settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Message of the origin synthesized for failures without a known cause
    #[serde(default = "default_message")]
    pub default_message: String,

    /// Emit a debug event whenever an adapter captures a failure
    #[serde(default = "default_true")]
    pub log_captures: bool,

    /// Keep the panic hook silent for panics that an adapter captures
    #[serde(default)]
    pub quiet_panics: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            log_captures: default_true(),
            quiet_panics: false,
        }
    }
}

impl DiagnosticsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.default_message.trim().is_empty() {
            return Err("diagnostics.default_message must not be empty".to_string());
        }
        Ok(())
    }
}

/// Output format of the console log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid logging.format '{s}'. Must be one of: pretty, json"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format
    #[serde(default)]
    pub format: LogFormat,

    /// Enable local file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Local log directory
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_file_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file_enabled: false,
            file_path: default_file_path(),
            file_rotation: default_file_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.file_enabled && self.file_path.trim().is_empty() {
            return Err("logging.file_path is required when file logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_message() -> String {
    "Unspecified error".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_file_path() -> String {
    "./logs".to_string()
}

fn default_file_rotation() -> String {
    "daily".to_string()
}

fn default_true() -> bool {
    true
}
