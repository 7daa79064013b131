//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rates or computing
//! a payslip.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "worked_hours".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'worked_hours': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input field was absent, non-numeric, or outside its valid range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A structural constant used as a divisor is zero.
    ///
    /// The engine recovers from this locally by substituting zero for the
    /// affected component; it is never returned from
    /// [`PayrollEngine::compute_salary`](crate::calculation::PayrollEngine::compute_salary).
    #[error("Undefined base: {constant} is zero")]
    UndefinedBase {
        /// Name of the zero constant.
        constant: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payroll snapshot could not be serialized or rehydrated.
    #[error("Serialization error for '{what}': {message}")]
    SerializationError {
        /// Which blob failed (e.g. "input_data").
        what: String,
        /// The underlying serde message.
        message: String,
    },

    /// A rate table was structurally unusable.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("seniority_rate_percent", "must be at most 100");
        assert_eq!(
            error.to_string(),
            "Invalid input 'seniority_rate_percent': must be at most 100"
        );
    }

    #[test]
    fn test_undefined_base_displays_constant() {
        let error = EngineError::UndefinedBase {
            constant: "standard_annual_work_days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Undefined base: standard_annual_work_days is zero"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_serialization_error_displays_blob_and_message() {
        let error = EngineError::SerializationError {
            what: "result_data".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Serialization error for 'result_data': EOF while parsing"
        );
    }

    #[test]
    fn test_invalid_rate_table_displays_message() {
        let error = EngineError::InvalidRateTable {
            message: "no tax brackets".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid rate table: no tax brackets");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn rejects() -> EngineResult<()> {
            Err(EngineError::invalid_input("hourly_rate", "must not be negative"))
        }

        fn propagates() -> EngineResult<()> {
            rejects()?;
            Ok(())
        }

        assert!(matches!(
            propagates(),
            Err(EngineError::InvalidInput { .. })
        ));
    }
}
