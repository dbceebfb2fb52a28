//! Calculator state types.

use std::fmt;

/// Specifying how the display text is interpreted, and so how the next
/// digit or decimal key behaves.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisplayMode {
    Input,
    Result,
    Error,
}

/// Specifying the binary operators.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Return the operator for a key symbol, if any.
    ///
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Houses the running computation.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub(super) display_text: String,
    pub(super) mode: DisplayMode,
    pub(super) pending_operator: Option<Operator>,
    pub(super) accumulator: f64,
    pub(super) awaiting_fresh_entry: bool,
    pub(super) max_length: usize,
}

impl CalculatorState {
    /// Return a cleared state holding at most `max_length` digits.
    ///
    pub fn new(max_length: usize) -> Self {
        CalculatorState {
            display_text: "0".to_string(),
            mode: DisplayMode::Input,
            pending_operator: None,
            accumulator: 0.0,
            awaiting_fresh_entry: true,
            max_length,
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
