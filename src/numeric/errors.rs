// ============================================================================
// Numeric Errors
// Error types for rounding and random range operations
// ============================================================================

use std::fmt;

/// Errors that can occur in the numeric utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Range bounds are inverted (`min > max`)
    InvalidArgument { min: i32, max: i32 },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument { min, max } => {
                write!(f, "invalid argument: min must be <= max (min={min}, max={max})")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
