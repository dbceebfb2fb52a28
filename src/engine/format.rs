//! Display formatting for calculator results.
//!
//! Results are shown with at most five fractional digits and no trailing
//! zeros, and never with more digits than the display holds.

use super::ArithmeticError;

/// Maximum number of fractional digits shown for a result.
///
pub const FRACTION_DIGITS: usize = 5;

/// Format a result for the display, keeping the digit count within `max_length`.
///
/// Fractional digits are dropped first when the text is too long. When the
/// integer part alone doesn't fit, or the value isn't finite, the result is an
/// `Overflow` error.
///
pub fn format_number(value: f64, max_length: usize) -> Result<String, ArithmeticError> {
    if !value.is_finite() || value.abs() >= 10f64.powi(max_length.min(308) as i32) {
        return Err(ArithmeticError::Overflow);
    }

    (0..=FRACTION_DIGITS)
        .rev()
        .map(|precision| format_with_precision(value, precision))
        .find(|text| digit_count(text) <= max_length)
        .ok_or(ArithmeticError::Overflow)
}

/// Count the digits of a display text, ignoring sign and decimal point.
///
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

fn format_with_precision(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    // Rounding may leave a negative zero behind
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
