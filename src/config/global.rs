//! Process-wide configuration
//!
//! The configuration is installed once per process and read wherever the
//! container needs it, for example when an origin is synthesized.

use super::schema::ResultantConfig;
use crate::domain::errors::ResultantError;
use crate::domain::result::Result;
use std::sync::OnceLock;

static INSTALLED: OnceLock<ResultantConfig> = OnceLock::new();

/// Installs the process-wide configuration
///
/// The configuration is validated first. It can be installed only once, and
/// only before anything has read it through [`current`].
///
/// # Errors
///
/// Returns `ResultantError::Configuration` if validation fails or a
/// configuration is already in place.
///
/// # Example
///
/// ```no_run
/// use resultant::config::{install, load_config};
///
/// let config = load_config("resultant.toml").expect("Failed to load config");
/// install(config).expect("Configuration already installed");
/// ```
pub fn install(config: ResultantConfig) -> Result<()> {
    config.validate().map_err(|e| {
        ResultantError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    INSTALLED.set(config).map_err(|_| {
        ResultantError::Configuration("configuration is already installed".to_string())
    })?;

    tracing::debug!(
        default_message = %current().diagnostics.default_message,
        log_captures = current().diagnostics.log_captures,
        quiet_panics = current().diagnostics.quiet_panics,
        "Configuration installed"
    );
    Ok(())
}

/// Returns the process-wide configuration
///
/// Falls back to (and pins) the defaults when nothing was installed.
pub fn current() -> &'static ResultantConfig {
    INSTALLED.get_or_init(ResultantConfig::default)
}
