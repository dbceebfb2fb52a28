use super::Frame;
use crate::config::hotkeys::format_hotkey_display;
use crate::config::HotkeyAction;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Button layout, top row first.
///
const KEYPAD: &[&[HotkeyAction]] = &[
    &[
        HotkeyAction::Clear,
        HotkeyAction::Backspace,
        HotkeyAction::Percent,
        HotkeyAction::Reciprocal,
    ],
    &[
        HotkeyAction::SquareRoot,
        HotkeyAction::Power,
        HotkeyAction::SignToggle,
        HotkeyAction::Divide,
    ],
    &[
        HotkeyAction::Digit7,
        HotkeyAction::Digit8,
        HotkeyAction::Digit9,
        HotkeyAction::Multiply,
    ],
    &[
        HotkeyAction::Digit4,
        HotkeyAction::Digit5,
        HotkeyAction::Digit6,
        HotkeyAction::Subtract,
    ],
    &[
        HotkeyAction::Digit1,
        HotkeyAction::Digit2,
        HotkeyAction::Digit3,
        HotkeyAction::Add,
    ],
    &[
        HotkeyAction::Digit0,
        HotkeyAction::Decimal,
        HotkeyAction::Equals,
    ],
];

/// Minimum button height for the hotkey hint to be drawn under the label.
///
const HINT_MIN_HEIGHT: u16 = 4;

/// Render keypad widget according to state.
///
pub fn keypad(frame: &mut Frame, size: Rect, state: &mut State) {
    let row_count = KEYPAD.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            KEYPAD
                .iter()
                .map(|_| Constraint::Ratio(1, row_count))
                .collect::<Vec<_>>(),
        )
        .split(size);

    for (row, actions) in rows.iter().zip(KEYPAD.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                actions
                    .iter()
                    .map(|_| Constraint::Ratio(1, actions.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(*row);
        for (cell, action) in columns.iter().zip(actions.iter()) {
            button(frame, *cell, state, *action);
        }
    }
}

fn button(frame: &mut Frame, size: Rect, state: &State, action: HotkeyAction) {
    let theme = state.get_theme();
    let highlighted = state.get_last_action() == Some(action);

    let mut lines = vec![Line::from(Span::styled(
        action.label(),
        styling::key_style(theme, action, highlighted),
    ))];
    if size.height >= HINT_MIN_HEIGHT {
        if let Some(hotkey) = state.get_hotkeys().primary(action) {
            let hint = format_hotkey_display(hotkey);
            // A hint equal to the label adds nothing
            if hint != action.label() {
                lines.push(Line::from(Span::styled(
                    hint,
                    styling::muted_text_style(theme),
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::key_border_style(theme, action, highlighted));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, size);
}
