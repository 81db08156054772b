//! Error types for the Zeitgeist data layer.

use thiserror::Error;

/// The main error type for Zeitgeist operations.
#[derive(Debug, Error)]
pub enum ZeitgeistError {
    /// A year-month string did not match the `YYYY-MM` format.
    #[error("Invalid year-month: {0}")]
    InvalidYearMonth(String),

    /// A date or year range is inverted or otherwise unusable.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Error fetching data from the managed data service.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// A metadata blob is missing or has the wrong type tag.
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Error decoding a JSON payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for ZeitgeistError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ZeitgeistError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Zeitgeist operations.
pub type Result<T> = std::result::Result<T, ZeitgeistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZeitgeistError::InvalidYearMonth("2020-13".to_string());
        assert_eq!(err.to_string(), "Invalid year-month: 2020-13");

        let err = ZeitgeistError::DataFetch("connection refused".to_string());
        assert_eq!(err.to_string(), "Data fetch error: connection refused");
    }

    #[test]
    fn test_error_from_str() {
        let err: ZeitgeistError = "boom".into();
        assert!(matches!(err, ZeitgeistError::Other(_)));
    }
}
