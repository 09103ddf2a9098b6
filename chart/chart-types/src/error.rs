//! Error types for chart data operations.

use thiserror::Error;

/// Errors that can occur when constructing or mutating chart data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The value is not a valid FDI tooth number.
    ///
    /// Valid numbers are 11-18, 21-28, 31-38, and 41-48 (quadrant digit
    /// followed by position-in-quadrant digit).
    #[error("invalid FDI tooth number: {0}")]
    InvalidToothNumber(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::InvalidToothNumber(19);
        assert!(err.to_string().contains("19"));
    }
}
