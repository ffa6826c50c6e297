//! Result type alias for the ambient layers
//!
//! Configuration loading, logging setup and report serialization return this
//! alias. Modeled failures use [`Outcome`](crate::domain::Outcome) instead.

use super::errors::ResultantError;

/// Result type alias with `ResultantError` as the error type
///
/// # Examples
///
/// ```
/// use resultant::domain::result::Result;
/// use resultant::domain::errors::ResultantError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ResultantError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ResultantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ResultantError::Io("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            let parsed: toml::Value = toml::from_str("answer = 42")?;
            Ok(parsed["answer"].as_integer().unwrap_or_default() as i32)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
