// ============================================================================
// Input Errors
// Error types for prompted console reads
// ============================================================================

use std::fmt;
use std::io;

/// Errors that can occur while prompting for and reading input.
#[derive(Debug)]
pub enum InputError {
    /// A token was read but does not parse as the requested type.
    /// The token is left unconsumed.
    FormatMismatch {
        token: String,
        expected: &'static str,
    },
    /// The input stream has no further token or line
    EndOfInput,
    /// A physical input line exceeded the configured limit
    LineTooLong { limit: usize },
    /// Reader configuration failed validation
    InvalidConfig(String),
    /// Underlying stream failure
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::FormatMismatch { token, expected } => {
                write!(f, "format mismatch: {token:?} is not a valid {expected}")
            },
            InputError::EndOfInput => write!(f, "end of input"),
            InputError::LineTooLong { limit } => {
                write!(f, "input line exceeds {limit} bytes")
            },
            InputError::InvalidConfig(reason) => write!(f, "invalid reader config: {reason}"),
            InputError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl InputError {
    /// True for `FormatMismatch`, the only error after which the same
    /// token can be read again.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self, InputError::FormatMismatch { .. })
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, InputError::EndOfInput)
    }
}

/// Result type alias for input operations
pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = InputError::FormatMismatch {
            token: "abc".to_string(),
            expected: "integer",
        };
        assert_eq!(err.to_string(), "format mismatch: \"abc\" is not a valid integer");
        assert_eq!(InputError::EndOfInput.to_string(), "end of input");
        assert_eq!(
            InputError::LineTooLong { limit: 8 }.to_string(),
            "input line exceeds 8 bytes"
        );
    }

    #[test]
    fn test_io_error_source() {
        let err = InputError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.source().is_some());
        assert!(InputError::EndOfInput.source().is_none());
    }

    #[test]
    fn test_predicates() {
        assert!(InputError::EndOfInput.is_end_of_input());
        assert!(!InputError::EndOfInput.is_format_mismatch());
        assert!(InputError::FormatMismatch {
            token: "x".to_string(),
            expected: "number",
        }
        .is_format_mismatch());
    }
}
