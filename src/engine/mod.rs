//! Calculator engine module.
//!
//! This module contains the running-accumulator calculator, including:
//! - `CalculatorEngine`, which applies key presses to the state
//! - Pure arithmetic operations and result formatting
//! - Calculator error kinds and their display messages
//!
//! Evaluation is strictly left to right with one pending operator. Failures
//! never reach the caller: they put the engine into error mode and raise an
//! alert the host collects with `take_alert`.

mod error;
mod input;
mod state;

pub mod format;
pub mod ops;

pub use error::ArithmeticError;
pub use input::Input;
pub use state::{CalculatorState, DisplayMode, Operator};

use log::*;

/// Default maximum number of digits on the display.
///
pub const DEFAULT_MAX_LENGTH: usize = 13;

/// Oversees the calculator state and applies input events to it.
///
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: CalculatorState,
    alert: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        CalculatorEngine::new(DEFAULT_MAX_LENGTH)
    }
}

impl CalculatorEngine {
    /// Return a cleared engine whose display holds at most `max_length` digits.
    ///
    pub fn new(max_length: usize) -> Self {
        CalculatorEngine {
            state: CalculatorState::new(max_length),
            alert: false,
        }
    }

    /// Dispatch an input event to the matching operation.
    ///
    pub fn handle(&mut self, input: Input) {
        debug!("Handling calculator input {:?}...", input);
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::Operator(operator) => self.input_operator(operator),
            Input::Equals => self.input_equals(),
            Input::Clear => self.reset(),
            Input::Backspace => self.input_backspace(),
            Input::SignToggle => self.input_sign_toggle(),
            Input::Percent => self.input_percent(),
            Input::Reciprocal => self.input_reciprocal(),
            Input::SquareRoot => self.input_square_root(),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator()
    }

    pub fn accumulator(&self) -> f64 {
        self.state.accumulator()
    }

    pub fn is_error(&self) -> bool {
        self.state.mode == DisplayMode::Error
    }

    /// Return the accumulator and pending operator as text, like `"3 +"`.
    ///
    pub fn pending_expression(&self) -> Option<String> {
        let operator = self.state.pending_operator?;
        let accumulator = format::format_number(self.state.accumulator, self.state.max_length)
            .unwrap_or_else(|_| self.state.accumulator.to_string());
        Some(format!("{} {}", accumulator, operator))
    }

    /// Return and clear the alert raised by the last error, if any.
    ///
    pub fn take_alert(&mut self) -> bool {
        std::mem::take(&mut self.alert)
    }

    /// Clear the display, the accumulator and any pending operator.
    ///
    pub fn reset(&mut self) {
        let max_length = self.state.max_length;
        self.state = CalculatorState::new(max_length);
    }

    /// Append a digit to the current entry, starting a new entry if the last
    /// key completed one. Digits beyond the display length are dropped.
    ///
    pub fn input_digit(&mut self, digit: u8) {
        if self.is_error() {
            return;
        }
        if digit > 9 {
            warn!("Ignoring invalid digit {}", digit);
            return;
        }

        let state = &mut self.state;
        if state.awaiting_fresh_entry {
            state.display_text.clear();
        }
        if state.display_text == "0" {
            state.display_text.clear();
        } else if state.display_text == "-0" {
            state.display_text.truncate(1);
        }
        if format::digit_count(&state.display_text) < state.max_length {
            state.display_text.push(char::from(b'0' + digit));
        }
        state.mode = DisplayMode::Input;
        state.awaiting_fresh_entry = false;
    }

    /// Add a decimal point to the current entry. Pressing it again on the same
    /// entry has no effect.
    ///
    pub fn input_decimal(&mut self) {
        if self.is_error() {
            return;
        }

        let state = &mut self.state;
        if state.awaiting_fresh_entry {
            state.display_text = "0.".to_string();
        } else if !state.display_text.contains('.') {
            state.display_text.push('.');
        }
        state.mode = DisplayMode::Input;
        state.awaiting_fresh_entry = false;
    }

    /// Resolve any pending operator against the current entry, then hold the
    /// result as the left operand of `operator`.
    ///
    pub fn input_operator(&mut self, operator: Operator) {
        if self.is_error() {
            return;
        }
        match self.resolve_pending() {
            Ok(value) => {
                self.state.accumulator = value;
                self.state.pending_operator = Some(operator);
            }
            Err(error) => self.show_error(error),
        }
    }

    /// Resolve the pending operator, if any, and show the result.
    ///
    pub fn input_equals(&mut self) {
        if self.is_error() {
            return;
        }
        match self.resolve_pending() {
            Ok(value) => {
                self.state.accumulator = value;
                self.state.pending_operator = None;
            }
            Err(error) => self.show_error(error),
        }
    }

    pub fn input_percent(&mut self) {
        self.apply_unary(|value| Ok(ops::percent(value)));
    }

    pub fn input_reciprocal(&mut self) {
        self.apply_unary(ops::reciprocal);
    }

    /// Take the square root of the current value, resolving any pending
    /// operator first.
    ///
    pub fn input_square_root(&mut self) {
        if self.is_error() {
            return;
        }
        if self.state.pending_operator.is_some() {
            self.input_equals();
        }
        self.apply_unary(ops::square_root);
    }

    /// Toggle the sign of the entry being typed, or negate the shown result.
    /// A minus sign is never added to zero, but can always be removed.
    ///
    pub fn input_sign_toggle(&mut self) {
        match self.state.mode {
            DisplayMode::Error => {}
            DisplayMode::Input => {
                if self.state.display_text.starts_with('-') {
                    self.state.display_text.remove(0);
                    return;
                }
                if self.current_value().map_or(true, |value| value == 0.0) {
                    return;
                }
                self.state.display_text.insert(0, '-');
            }
            DisplayMode::Result => {
                if let Ok(value) = self.current_value() {
                    if value != 0.0 {
                        if let Err(error) = self.show_result(ops::negate(value)) {
                            self.show_error(error);
                        }
                    }
                }
            }
        }
    }

    /// Remove the last character of the display. An error message is
    /// replaced by `"0"` as a whole.
    ///
    pub fn input_backspace(&mut self) {
        let state = &mut self.state;
        if state.mode == DisplayMode::Error {
            state.display_text = "0".to_string();
            state.mode = DisplayMode::Input;
            state.awaiting_fresh_entry = true;
            return;
        }

        state.display_text.pop();
        if state.display_text.is_empty() || state.display_text == "-" {
            state.display_text = "0".to_string();
        }
    }

    /// Parse the display text as a number.
    ///
    fn current_value(&self) -> Result<f64, ArithmeticError> {
        self.state
            .display_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ArithmeticError::InvalidEntry)
    }

    /// Evaluate the pending operator against the accumulator and the current
    /// value, or take the current value when nothing is pending, and show it.
    ///
    fn resolve_pending(&mut self) -> Result<f64, ArithmeticError> {
        let operand = self.current_value()?;
        let value = evaluate(self.state.accumulator, operand, self.state.pending_operator)?;
        self.show_result(value)
    }

    fn apply_unary<F>(&mut self, operation: F)
    where
        F: FnOnce(f64) -> Result<f64, ArithmeticError>,
    {
        if self.is_error() {
            return;
        }
        let outcome = self
            .current_value()
            .and_then(operation)
            .and_then(|value| self.show_result(value));
        if let Err(error) = outcome {
            self.show_error(error);
        }
    }

    fn show_result(&mut self, value: f64) -> Result<f64, ArithmeticError> {
        let text = format::format_number(value, self.state.max_length)?;
        self.state.display_text = text;
        self.state.mode = DisplayMode::Result;
        self.state.awaiting_fresh_entry = true;
        Ok(value)
    }

    fn show_error(&mut self, error: ArithmeticError) {
        warn!("Calculation failed: {}", error);
        let state = &mut self.state;
        state.display_text = error.message().to_string();
        state.mode = DisplayMode::Error;
        state.pending_operator = None;
        state.accumulator = 0.0;
        state.awaiting_fresh_entry = true;
        self.alert = true;
    }
}

/// Apply `operator` to the accumulator and operand. With no operator the
/// operand is the result.
///
fn evaluate(
    accumulator: f64,
    operand: f64,
    operator: Option<Operator>,
) -> Result<f64, ArithmeticError> {
    match operator {
        Some(operator) => ops::apply(operator, accumulator, operand),
        None => Ok(operand),
    }
}
