use crate::clipboard::copy_to_clipboard;
use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(state, event)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key event to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    // Terminals with keyboard enhancement also report releases and repeats
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }
    match get_action_for_event(&event, state.get_hotkeys()) {
        Some(action) => dispatch_action(state, action),
        None => {
            trace!("Ignoring unbound key '{:?}'", event.code);
            true
        }
    }
}

/// Perform a hotkey action. Returns false if exit was requested.
///
pub fn dispatch_action(state: &mut State, action: HotkeyAction) -> bool {
    match action {
        HotkeyAction::Quit => {
            debug!("Processing quit action...");
            return false;
        }
        HotkeyAction::CopyResult => copy_result(state),
        HotkeyAction::ToggleLog => state.toggle_log(),
        HotkeyAction::CycleTheme => state.cycle_theme(),
        _ => {
            if let Some(input) = action.input() {
                state.press(action, input);
            }
        }
    }
    true
}

fn copy_result(state: &mut State) {
    let text = match state.copyable_result() {
        Some(text) => text.to_string(),
        None => {
            state.set_status_message("Nothing to copy".to_string());
            return;
        }
    };
    match copy_to_clipboard(&text) {
        Ok(()) => {
            info!("Copied '{}' to clipboard", text);
            state.set_status_message(format!("Copied {}", text));
        }
        Err(e) => {
            error!("{}", e);
            state.set_status_message("Copy failed".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn type_keys(state: &mut State, keys: &str) {
        for c in keys.chars() {
            assert!(handle_key(state, key(c)));
        }
    }

    #[test]
    fn test_keys_drive_the_calculator() {
        let mut state = State::default();
        type_keys(&mut state, "12+7=");
        assert_eq!(state.engine().display_text(), "19");

        type_keys(&mut state, "2^10");
        assert!(handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
        ));
        assert_eq!(state.engine().display_text(), "1024");
    }

    #[test]
    fn test_shifted_symbols_match() {
        let mut state = State::default();
        type_keys(&mut state, "50");
        assert!(handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('%'), KeyModifiers::SHIFT)
        ));
        assert_eq!(state.engine().display_text(), "0.5");
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut state = State::default();
        type_keys(&mut state, "123");
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        );
        assert_eq!(state.engine().display_text(), "12");
        handle_key(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(state.engine().display_text(), "0");
    }

    #[test]
    fn test_quit_and_ctrl_c_exit() {
        let mut state = State::default();
        assert!(!handle_key(&mut state, key('q')));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = State::default();
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('7'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(handle_key(&mut state, release));
        assert_eq!(state.engine().display_text(), "0");
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut state = State::default();
        type_keys(&mut state, "4z");
        assert_eq!(state.engine().display_text(), "4");
    }

    #[test]
    fn test_application_actions() {
        let mut state = State::default();
        let visible = state.is_log_visible();
        assert!(dispatch_action(&mut state, HotkeyAction::ToggleLog));
        assert_ne!(state.is_log_visible(), visible);

        let theme = state.get_theme().name.clone();
        assert!(dispatch_action(&mut state, HotkeyAction::CycleTheme));
        assert_ne!(state.get_theme().name, theme);
    }

    #[test]
    fn test_copy_in_error_mode_reports_nothing_to_copy() {
        let mut state = State::default();
        type_keys(&mut state, "0r");
        assert!(state.engine().is_error());
        assert!(dispatch_action(&mut state, HotkeyAction::CopyResult));
        assert_eq!(state.get_status_message(), Some("Nothing to copy"));
    }
}
