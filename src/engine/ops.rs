//! Arithmetic operations.
//!
//! Pure functions over two operands (or one, for the unary keys). Operations
//! that can fail return the specific `ArithmeticError` kind instead of a
//! non-finite value.

use super::{ArithmeticError, Operator};

pub fn add(left: f64, right: f64) -> f64 {
    left + right
}

pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// Divide `left` by `right`, failing when `right` is zero.
///
pub fn divide(left: f64, right: f64) -> Result<f64, ArithmeticError> {
    if right == 0.0 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(left / right)
}

/// Raise `base` to `exponent`.
///
/// A negative base only accepts integral exponents, otherwise the result
/// would be complex. A zero base with a negative exponent divides by zero.
///
pub fn power(base: f64, exponent: f64) -> Result<f64, ArithmeticError> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(ArithmeticError::NonRealNumber);
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(base.powf(exponent))
}

pub fn reciprocal(value: f64) -> Result<f64, ArithmeticError> {
    if value == 0.0 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(1.0 / value)
}

/// Return the principal (non-negative) square root.
///
pub fn square_root(value: f64) -> Result<f64, ArithmeticError> {
    if value < 0.0 {
        return Err(ArithmeticError::NonRealNumber);
    }
    Ok(value.sqrt())
}

pub fn percent(value: f64) -> f64 {
    value * 0.01
}

pub fn negate(value: f64) -> f64 {
    -value
}

/// Apply a binary operator to the accumulator (`left`) and the entered operand (`right`).
///
pub fn apply(operator: Operator, left: f64, right: f64) -> Result<f64, ArithmeticError> {
    match operator {
        Operator::Add => Ok(add(left, right)),
        Operator::Subtract => Ok(subtract(left, right)),
        Operator::Multiply => Ok(multiply(left, right)),
        Operator::Divide => divide(left, right),
        Operator::Power => power(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(3.0, 4.0), 7.0);
        assert_eq!(subtract(3.0, 4.0), -1.0);
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(divide(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(5.0, 0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(divide(0.0, 0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(divide(-1.5, -0.0), Err(ArithmeticError::DivideByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), Ok(1024.0));
        assert_eq!(power(-2.0, 3.0), Ok(-8.0));
        assert!((power(4.0, 0.5).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(power(2.0, -1.0), Ok(0.5));
        assert_eq!(power(0.0, 0.0), Ok(1.0));
    }

    #[test]
    fn test_power_failures() {
        assert_eq!(power(-8.0, 0.5), Err(ArithmeticError::NonRealNumber));
        assert_eq!(power(-1.0, -1.5), Err(ArithmeticError::NonRealNumber));
        assert_eq!(power(0.0, -2.0), Err(ArithmeticError::DivideByZero));
    }

    #[test]
    fn test_unary_operations() {
        assert_eq!(reciprocal(4.0), Ok(0.25));
        assert_eq!(reciprocal(0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(square_root(4.0), Ok(2.0));
        assert_eq!(square_root(0.0), Ok(0.0));
        assert_eq!(square_root(-1.0), Err(ArithmeticError::NonRealNumber));
        assert_eq!(percent(50.0), 0.5);
        assert_eq!(negate(3.0), -3.0);
        assert_eq!(negate(-3.0), 3.0);
    }

    #[test]
    fn test_apply_dispatches_by_operator() {
        assert_eq!(apply(Operator::Add, 1.0, 2.0), Ok(3.0));
        assert_eq!(apply(Operator::Subtract, 1.0, 2.0), Ok(-1.0));
        assert_eq!(apply(Operator::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(apply(Operator::Divide, 1.0, 0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(apply(Operator::Power, 3.0, 2.0), Ok(9.0));
    }
}
