use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the calculator display: the pending expression above the current
/// value, both right aligned.
///
pub fn display(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let engine = state.engine();

    let expression = engine.pending_expression().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            expression,
            styling::muted_text_style(theme).fg(theme.expression.to_color()),
        )),
        Line::from(Span::styled(
            engine.display_text().to_string(),
            styling::display_style(theme, engine.mode()),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(" calc-tui ", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, size);
}
