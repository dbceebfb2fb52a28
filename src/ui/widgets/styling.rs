use crate::config::HotkeyAction;
use crate::engine::DisplayMode;
use crate::ui::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for hints and secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the main display value in the given mode.
///
pub fn display_style(theme: &Theme, mode: DisplayMode) -> Style {
    let color = match mode {
        DisplayMode::Error => theme.error.to_color(),
        DisplayMode::Input | DisplayMode::Result => theme.display.to_color(),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Return the background colour of the footer mode indicator.
///
pub fn mode_indicator_color(theme: &Theme, mode: DisplayMode) -> Color {
    match mode {
        DisplayMode::Input => theme.border_active.to_color(),
        DisplayMode::Result => theme.success.to_color(),
        DisplayMode::Error => theme.error.to_color(),
    }
}

/// Return the colour of a keypad button by the kind of key it is.
///
fn key_color(theme: &Theme, action: HotkeyAction) -> Color {
    let color = match action {
        HotkeyAction::Digit0
        | HotkeyAction::Digit1
        | HotkeyAction::Digit2
        | HotkeyAction::Digit3
        | HotkeyAction::Digit4
        | HotkeyAction::Digit5
        | HotkeyAction::Digit6
        | HotkeyAction::Digit7
        | HotkeyAction::Digit8
        | HotkeyAction::Digit9
        | HotkeyAction::Decimal => &theme.digit_key,
        HotkeyAction::Add
        | HotkeyAction::Subtract
        | HotkeyAction::Multiply
        | HotkeyAction::Divide
        | HotkeyAction::Power => &theme.operator_key,
        HotkeyAction::Equals => &theme.equals_key,
        _ => &theme.function_key,
    };
    color.to_color()
}

/// Return the style for a keypad button label.
///
pub fn key_style(theme: &Theme, action: HotkeyAction, highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(theme.highlight_bg.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(key_color(theme, action))
            .add_modifier(Modifier::BOLD)
    }
}

/// Return the border style for a keypad button.
///
pub fn key_border_style(theme: &Theme, action: HotkeyAction, highlighted: bool) -> Style {
    if highlighted {
        active_block_border_style(theme)
    } else {
        Style::default().fg(key_color(theme, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_style_uses_error_colour() {
        let theme = Theme::default();
        assert_eq!(
            display_style(&theme, DisplayMode::Error).fg,
            Some(theme.error.to_color())
        );
        assert_eq!(
            display_style(&theme, DisplayMode::Result).fg,
            Some(theme.display.to_color())
        );
    }

    #[test]
    fn test_key_style_by_kind() {
        let theme = Theme::default();
        assert_eq!(
            key_style(&theme, HotkeyAction::Digit7, false).fg,
            Some(theme.digit_key.to_color())
        );
        assert_eq!(
            key_style(&theme, HotkeyAction::Power, false).fg,
            Some(theme.operator_key.to_color())
        );
        assert_eq!(
            key_style(&theme, HotkeyAction::SquareRoot, false).fg,
            Some(theme.function_key.to_color())
        );
        assert_eq!(
            key_style(&theme, HotkeyAction::Equals, true).bg,
            Some(theme.highlight_bg.to_color())
        );
    }
}
