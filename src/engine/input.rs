//! Discrete input events accepted by the engine.

use super::Operator;

/// Specifying the calculator keys.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Input {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    SignToggle,
    Percent,
    Reciprocal,
    SquareRoot,
}
