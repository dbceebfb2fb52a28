use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::engine::DisplayMode;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Application actions advertised in the footer.
///
const FOOTER_ACTIONS: [(HotkeyAction, &str); 4] = [
    (HotkeyAction::CopyResult, "copy"),
    (HotkeyAction::ToggleLog, "log"),
    (HotkeyAction::CycleTheme, "theme"),
    (HotkeyAction::Quit, "quit"),
];

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mode = state.engine().mode();
    let indicator = match mode {
        DisplayMode::Input => "INPUT:",
        DisplayMode::Result => "RESULT:",
        DisplayMode::Error => "ERROR:",
    };

    let controls = match state.get_status_message() {
        Some(message) => Span::styled(
            format!(" {}", message),
            Style::default().fg(theme.success.to_color()),
        ),
        None => Span::styled(
            build_footer_text(state.get_hotkeys(), &FOOTER_ACTIONS),
            styling::muted_text_style(theme),
        ),
    };

    let controls_content = Line::from(vec![
        Span::styled(
            indicator,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(styling::mode_indicator_color(theme, mode))
                .add_modifier(Modifier::BOLD),
        ),
        controls,
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        styling::muted_text_style(theme),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
