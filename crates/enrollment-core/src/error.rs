use thiserror::Error;

use crate::cube::Axis;

/// All errors produced by the enrollment statistics crates.
#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// A yearly table does not hold exactly one cell per (school, grade).
    #[error("Table for {year} has {actual} cells, expected {expected}")]
    TableShape {
        year: i32,
        expected: usize,
        actual: usize,
    },

    /// The number of yearly tables does not match the declared year range.
    #[error("Expected {expected} yearly tables, got {actual}")]
    YearCount { expected: usize, actual: usize },

    /// A dataset configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dataset document could not be parsed.
    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// No roster entry matches the user's input.
    #[error("No school matches {0:?}")]
    SchoolNotFound(String),

    /// A year, school or grade lies outside the cube.
    #[error("{axis} {value} is out of range")]
    OutOfRange { axis: Axis, value: i64 },

    /// A view was asked to fix an axis it no longer has.
    #[error("View has no {0} axis")]
    MissingAxis(Axis),

    /// Pass-through for I/O errors from the interactive prompt.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EnrollmentError {
    /// `true` for errors caused by malformed static input, which are fatal.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EnrollmentError::TableShape { .. }
                | EnrollmentError::YearCount { .. }
                | EnrollmentError::Config(_)
                | EnrollmentError::DatasetParse(_)
        )
    }
}

/// Convenience alias used throughout the enrollment crates.
pub type Result<T> = std::result::Result<T, EnrollmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_table_shape() {
        let err = EnrollmentError::TableShape {
            year: 2015,
            expected: 60,
            actual: 59,
        };
        assert_eq!(err.to_string(), "Table for 2015 has 59 cells, expected 60");
    }

    #[test]
    fn test_error_display_year_count() {
        let err = EnrollmentError::YearCount {
            expected: 10,
            actual: 9,
        };
        assert_eq!(err.to_string(), "Expected 10 yearly tables, got 9");
    }

    #[test]
    fn test_error_display_config() {
        let err = EnrollmentError::Config("empty roster".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty roster");
    }

    #[test]
    fn test_error_display_school_not_found() {
        let err = EnrollmentError::SchoolNotFound("nowhere high".to_string());
        assert_eq!(err.to_string(), "No school matches \"nowhere high\"");
    }

    #[test]
    fn test_error_display_out_of_range() {
        let err = EnrollmentError::OutOfRange {
            axis: Axis::Grade,
            value: 13,
        };
        assert_eq!(err.to_string(), "grade 13 is out of range");
    }

    #[test]
    fn test_error_display_missing_axis() {
        let err = EnrollmentError::MissingAxis(Axis::School);
        assert_eq!(err.to_string(), "View has no school axis");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: EnrollmentError = json_err.into();
        assert!(err.to_string().contains("Failed to parse dataset"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: EnrollmentError = io_err.into();
        assert!(err.to_string().contains("closed"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_not_found_is_recoverable() {
        let err = EnrollmentError::SchoolNotFound("x".to_string());
        assert!(!err.is_configuration());
    }
}
