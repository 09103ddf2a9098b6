//! Error types for wave engine operations.

use thiserror::Error;

/// Errors that can occur in the wave engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaveError {
    /// Viewport dimensions are unusable (non-positive or non-finite).
    #[error("invalid viewport: {width} x {height} (must be positive and finite)")]
    InvalidViewport {
        /// Logical width in pixels.
        width: f64,
        /// Logical height in pixels.
        height: f64,
    },
}

impl WaveError {
    /// Create an invalid viewport error.
    #[must_use]
    pub const fn invalid_viewport(width: f64, height: f64) -> Self {
        Self::InvalidViewport { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaveError::invalid_viewport(0.0, 120.0);
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("120"));
    }
}
