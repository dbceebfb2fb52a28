//! A running-accumulator calculator for the terminal.
//!
//! The calculation logic lives in [`engine`] and has no terminal
//! dependencies. The remaining modules build the interactive application
//! around it: configuration and hotkeys, logging, event handling, state and
//! rendering.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
