// ============================================================================
// Numeric Errors
// Error types for scaled-decimal arithmetic, conversion and parsing
// ============================================================================

use std::fmt;

/// Reasons the decimal text parser can reject its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A character that cannot start a number was found
    BadCharacter,
    /// Parsing ended before a single digit was read
    NoDigits,
    /// The state machine was driven past its terminal state
    InvalidState,
    /// The underlying reader failed
    StreamFault,
    /// The digit accumulator exceeded 64 bits
    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadCharacter => write!(f, "unexpected character"),
            ParseError::NoDigits => write!(f, "no digits"),
            ParseError::InvalidState => write!(f, "parser in invalid state"),
            ParseError::StreamFault => write!(f, "input stream fault"),
            ParseError::Overflow => write!(f, "too many digits"),
        }
    }
}

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below i64::MIN
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Result came through the lossy wide fallback; see `Outcome::into_exact`
    PrecisionLoss,
    /// Input value is invalid (NaN, infinite, ...)
    InvalidInput,
    /// Operand precision not allowed by the mixing mode
    ScaleMismatch,
    /// Precision outside the supported `0..=18` range
    PrecisionOutOfRange(u8),
    /// Decimal text could not be parsed
    Parse(ParseError),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: result was rounded in the wide decimal fallback"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: value not representable"),
            NumericError::ScaleMismatch => write!(f, "scale mismatch between operands"),
            NumericError::PrecisionOutOfRange(p) => {
                write!(f, "precision {} out of supported range 0..=18", p)
            },
            NumericError::Parse(e) => write!(f, "invalid decimal text: {}", e),
        }
    }
}

impl std::error::Error for NumericError {}

impl From<ParseError> for NumericError {
    fn from(e: ParseError) -> Self {
        NumericError::Parse(e)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
