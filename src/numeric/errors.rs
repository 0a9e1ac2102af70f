// ============================================================================
// Coordinate Errors
// Error types for the fixed-point coordinate codec and value type
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or accessing coordinate values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoordinateError {
    /// Input text does not denote a representable coordinate. Covers grammar
    /// violations, digit-count caps, garbage after a complete literal and
    /// values outside the scaled 32-bit range. Carries the offending text.
    Malformed { text: String },
    /// Axis values outside the -180 to 180 and -90 to 90 degree range,
    /// detected when a range-checked accessor is invoked.
    Invalid,
}

impl CoordinateError {
    /// Build a `Malformed` error for the given offending text.
    #[inline]
    pub(crate) fn malformed(text: &str) -> Self {
        CoordinateError::Malformed {
            text: text.to_owned(),
        }
    }
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Malformed { text } => {
                write!(f, "wrong format for coordinate: '{}'", text)
            },
            CoordinateError::Invalid => write!(f, "invalid coordinate: outside valid range"),
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Result type alias for coordinate operations
pub type CoordinateResult<T> = Result<T, CoordinateError>;
