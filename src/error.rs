//! Error types for roster reconciliation.
//!
//! Only loading and validating configuration or directory data can fail.
//! An unrecognized or ambiguous name is not an error: the matcher reports it
//! as a no-match and the caller surfaces it for manual review.

use thiserror::Error;

/// The main error type for roster reconciliation.
///
/// # Example
///
/// ```
/// use roster_reconcile::error::ReconcileError;
///
/// let error = ReconcileError::ConfigNotFound {
///     path: "/missing/matcher.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/matcher.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReconcileError {
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

    /// Configuration was well-formed but semantically invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_no}': {message}")]
    InvalidEmployee {
        /// The employee number of the offending record.
        employee_no: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Two directory rows share an employee number.
    #[error("Duplicate employee number: {employee_no}")]
    DuplicateEmployeeNo {
        /// The duplicated employee number.
        employee_no: String,
    },

    /// A roster date was not in `YYYY/MM/DD` form or named no real day.
    #[error("Invalid roster date: {value}")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },
}

/// A type alias for Results that return ReconcileError.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReconcileError::ConfigNotFound {
            path: "/missing/matcher.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/matcher.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ReconcileError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = ReconcileError::InvalidConfig {
            message: "variant pair maps '崎' to itself".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: variant pair maps '崎' to itself"
        );
    }

    #[test]
    fn test_invalid_employee_displays_number_and_message() {
        let error = ReconcileError::InvalidEmployee {
            employee_no: "012".to_string(),
            message: "canonical name is blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee '012': canonical name is blank"
        );
    }

    #[test]
    fn test_duplicate_employee_no_displays_number() {
        let error = ReconcileError::DuplicateEmployeeNo {
            employee_no: "003".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate employee number: 003");
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = ReconcileError::InvalidDate {
            value: "2025/13/01".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid roster date: 2025/13/01");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReconcileError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_date() -> ReconcileResult<()> {
            Err(ReconcileError::InvalidDate {
                value: "tomorrow".to_string(),
            })
        }

        fn propagates_error() -> ReconcileResult<()> {
            returns_invalid_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
