//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ResultantConfig;
use crate::domain::errors::ResultantError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Loads a `.env` file from the working directory, if present
/// 2. Reads the TOML file
/// 3. Performs environment variable substitution (${VAR} syntax)
/// 4. Parses the TOML into ResultantConfig
/// 5. Applies environment variable overrides (RESULTANT_* prefix)
/// 6. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use resultant::config::loader::load_config;
///
/// let config = load_config("resultant.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ResultantConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ResultantError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Missing .env is not an error
    let _ = dotenvy::dotenv();

    let contents = fs::read_to_string(path).map_err(|e| {
        ResultantError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ResultantConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ResultantError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ResultantError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the RESULTANT_* prefix
///
/// Variables follow the pattern RESULTANT_<SECTION>_<KEY>, for example
/// RESULTANT_LOGGING_LEVEL.
fn apply_env_overrides(config: &mut ResultantConfig) -> Result<()> {
    // Diagnostics overrides
    if let Ok(val) = std::env::var("RESULTANT_DIAGNOSTICS_DEFAULT_MESSAGE") {
        config.diagnostics.default_message = val;
    }
    if let Ok(val) = std::env::var("RESULTANT_DIAGNOSTICS_LOG_CAPTURES") {
        config.diagnostics.log_captures = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("RESULTANT_DIAGNOSTICS_QUIET_PANICS") {
        config.diagnostics.quiet_panics = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("RESULTANT_LOGGING_LEVEL") {
        config.logging.level = val.to_lowercase();
    }
    if let Ok(val) = std::env::var("RESULTANT_LOGGING_FORMAT") {
        config.logging.format = val.parse().map_err(ResultantError::Configuration)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("RESULTANT_TEST_SUBST_VAR", "test_value");
        let input = "default_message = \"${RESULTANT_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "default_message = \"test_value\"\n");
        std::env::remove_var("RESULTANT_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("RESULTANT_TEST_MISSING_VAR");
        let input = "default_message = \"${RESULTANT_TEST_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("RESULTANT_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("RESULTANT_TEST_COMMENTED_VAR");
        let input = "# default_message = \"${RESULTANT_TEST_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${RESULTANT_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(ResultantError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[diagnostics]
default_message = "No cause recorded"
log_captures = false

[logging]
level = "debug"
file_rotation = "hourly"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.diagnostics.default_message, "No cause recorded");
        assert!(!config.diagnostics.log_captures);
        assert_eq!(config.logging.file_rotation, "hourly");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging\nlevel = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
