//! Event handling module.
//!
//! This module contains the terminal event handler, which polls user input on
//! a separate thread and routes key presses to hotkey actions.

pub mod terminal;
