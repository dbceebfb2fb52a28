//! Application state management module.
//!
//! This module contains the state shared between event handling and rendering:
//! - The calculator engine
//! - Hotkey bindings and theme
//! - Log panel visibility, alert preference and the footer status message

use crate::config::{CalculatorHotkeys, Config, HotkeyAction};
use crate::engine::{CalculatorEngine, DisplayMode, Input};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;

/// Houses data representative of application state.
///
pub struct State {
    engine: CalculatorEngine,
    hotkeys: CalculatorHotkeys,
    theme: Theme,
    theme_changed: bool,
    log: LogBuffer,
    show_log: bool,
    bell: bool,
    status_message: Option<String>,
    last_action: Option<HotkeyAction>, // Highlighted on the keypad
}

impl Default for State {
    fn default() -> State {
        State::new(&Config::default(), LogBuffer::default())
    }
}

impl State {
    /// Return a new state configured from `config`, reading log entries from `log`.
    ///
    pub fn new(config: &Config, log: LogBuffer) -> State {
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to the default",
                config.theme_name
            );
            Theme::default()
        });
        State {
            engine: CalculatorEngine::new(config.max_length),
            hotkeys: config.hotkeys.clone(),
            theme,
            theme_changed: false,
            log,
            show_log: config.show_log,
            bell: config.bell,
            status_message: None,
            last_action: None,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Forward a calculator key to the engine.
    ///
    pub fn press(&mut self, action: HotkeyAction, input: Input) {
        self.status_message = None;
        self.last_action = Some(action);
        self.engine.handle(input);
    }

    /// Return the display text when it holds a number that can be copied.
    ///
    pub fn copyable_result(&self) -> Option<&str> {
        match self.engine.mode() {
            DisplayMode::Error => None,
            _ => Some(self.engine.display_text()),
        }
    }

    /// Return true once for every calculation error while the bell is enabled.
    ///
    pub fn take_alert(&mut self) -> bool {
        self.engine.take_alert() && self.bell
    }

    pub fn get_hotkeys(&self) -> &CalculatorHotkeys {
        &self.hotkeys
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next available theme.
    ///
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.theme_changed = true;
        info!("Switched to theme '{}'", self.theme.name);
        self.status_message = Some(format!("Theme: {}", self.theme.name));
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
        debug!("Log panel visible: {}", self.show_log);
    }

    /// Return the most recent `count` log entries, oldest first.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log.recent(count)
    }

    pub fn get_status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn get_last_action(&self) -> Option<HotkeyAction> {
        self.last_action
    }

    /// Copy the preferences that persist across runs back into `config`. The
    /// theme is only stored once it was changed from within the application,
    /// so a theme given on the command line stays limited to the session.
    ///
    pub fn store_preferences(&self, config: &mut Config) {
        if self.theme_changed {
            config.theme_name = self.theme.name.clone();
        }
        config.show_log = self.show_log;
    }
}
