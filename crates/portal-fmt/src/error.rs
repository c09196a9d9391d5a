//! Error types for the strict formatting entry points and locale loading.

use std::path::PathBuf;

/// Error returned by the `try_*` formatting functions.
///
/// The lenient functions never produce this; they surface bad input as a
/// sentinel rendering instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Date text could not be parsed into a calendar date.
    #[error("cannot parse '{input}' as a date")]
    InvalidDate { input: String },
    /// A timestamp fell outside the representable calendar range.
    #[error("timestamp {millis}ms is out of range")]
    TimestampOutOfRange { millis: i64 },
    /// Currency amount was NaN or infinite.
    #[error("amount {amount} is not finite")]
    NonFiniteAmount { amount: f64 },
}

/// Error returned when a locale definition cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("failed to read locale file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid locale definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A month name was left blank.
    #[error("month {month} has an empty name")]
    EmptyMonthName { month: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = FormatError::InvalidDate {
            input: "not a date".to_string(),
        };
        assert_eq!(err.to_string(), "cannot parse 'not a date' as a date");
    }

    #[test]
    fn test_non_finite_display() {
        let err = FormatError::NonFiniteAmount { amount: f64::NAN };
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_empty_month_display() {
        let err = LocaleError::EmptyMonthName { month: 3 };
        assert!(err.to_string().contains("month 3"));
    }
}
