//! Error handling module for the skill roadmap
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The roadmap generator itself never fails; everything here guards the
//! edges (dataset loading, form validation, terminal setup).

use thiserror::Error;

/// Main error type for the skill roadmap
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors from the reference dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference catalog errors (missing columns, unknown categories)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A categorical field holds a value outside its closed set
    #[error("Invalid {field}: '{value}' (expected one of: {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// A categorical field holds a value the reference catalog never saw
    #[error("Unknown {field}: '{value}' is not present in the reference dataset")]
    NotInCatalog { field: &'static str, value: String },

    /// A numeric field is outside its declared range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Validation errors (user input that is not a choice or range problem)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;

impl RoadmapError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an invalid-choice error listing the accepted values
    pub fn invalid_choice<I, S>(field: &'static str, value: impl Into<String>, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let expected: Vec<String> = expected.into_iter().map(|s| s.to_string()).collect();
        Self::InvalidChoice {
            field,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoadmapError::catalog("missing column 'interest'");
        assert_eq!(err.to_string(), "Catalog error: missing column 'interest'");

        let err = RoadmapError::validation("name too long");
        assert_eq!(err.to_string(), "Validation error: name too long");
    }

    #[test]
    fn test_invalid_choice_lists_expected_values() {
        let err = RoadmapError::invalid_choice("skill level", "Expert", ["Beginner", "Advanced"]);
        assert_eq!(
            err.to_string(),
            "Invalid skill level: 'Expert' (expected one of: Beginner, Advanced)"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = RoadmapError::out_of_range("GPA", 11.5, 0.0, 10.0);
        assert_eq!(err.to_string(), "GPA must be between 0 and 10, got 11.5");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RoadmapError = io_err.into();
        assert!(matches!(err, RoadmapError::Io(_)));
    }
}
