//! Calculator error types.

/// Failures raised by arithmetic and formatting. Each kind maps to the text
/// shown on the display while the calculator is in error mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Division by zero, reciprocal of zero, or zero raised to a negative power
    #[error("Undefined")]
    DivideByZero,

    /// Square root of a negative number or a negative base with a fractional exponent
    #[error("Non Real Number")]
    NonRealNumber,

    /// Display text that doesn't parse as a finite number
    #[error("Invalid Entry")]
    InvalidEntry,

    /// Result that cannot be shown within the display length
    #[error("Overflow")]
    Overflow,
}

impl ArithmeticError {
    /// Return the message shown on the display for this error.
    ///
    pub fn message(&self) -> &'static str {
        match self {
            ArithmeticError::DivideByZero => "Undefined",
            ArithmeticError::NonRealNumber => "Non Real Number",
            ArithmeticError::InvalidEntry => "Invalid Entry",
            ArithmeticError::Overflow => "Overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_error_messages() {
        assert_eq!(ArithmeticError::DivideByZero.message(), "Undefined");
        assert_eq!(ArithmeticError::NonRealNumber.message(), "Non Real Number");
        assert_eq!(ArithmeticError::InvalidEntry.message(), "Invalid Entry");
        assert_eq!(ArithmeticError::Overflow.message(), "Overflow");
    }

    #[test]
    fn test_arithmetic_error_display_matches_message() {
        for error in [
            ArithmeticError::DivideByZero,
            ArithmeticError::NonRealNumber,
            ArithmeticError::InvalidEntry,
            ArithmeticError::Overflow,
        ] {
            assert_eq!(error.to_string(), error.message());
        }
    }
}
