use super::{display, footer, keypad, log, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the display block, borders included.
///
const DISPLAY_HEIGHT: u16 = 4;

/// Width of the log panel when shown beside the keypad.
///
const LOG_WIDTH_PERCENT: u16 = 45;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    display(frame, rows[0], state);

    if state.is_log_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - LOG_WIDTH_PERCENT),
                Constraint::Percentage(LOG_WIDTH_PERCENT),
            ])
            .split(rows[1]);
        keypad(frame, columns[0], state);
        log(frame, columns[1], state);
    } else {
        keypad(frame, rows[1], state);
    }

    footer(frame, rows[2], state);
}
