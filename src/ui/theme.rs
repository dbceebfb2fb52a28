use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Keypad colors
    pub digit_key: ColorSpec,
    pub operator_key: ColorSpec,
    pub function_key: ColorSpec,
    pub equals_key: ColorSpec,

    // Display colors
    pub display: ColorSpec,
    pub expression: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            digit_key: ColorSpec::rgb(192, 202, 245),    // Foreground (brighter)
            operator_key: ColorSpec::rgb(125, 207, 255), // Blue
            function_key: ColorSpec::rgb(187, 154, 247), // Purple
            equals_key: ColorSpec::rgb(158, 206, 106),   // Green
            display: ColorSpec::rgb(255, 159, 196),      // Magenta
            expression: ColorSpec::rgb(117, 121, 148),   // Comment
            text: ColorSpec::rgb(169, 177, 214),         // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),   // Comment
            success: ColorSpec::rgb(158, 206, 106),      // Green
            error: ColorSpec::rgb(247, 118, 142),        // Red
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255), // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),    // Background
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            digit_key: ColorSpec::rgb(87, 82, 121),      // Text
            operator_key: ColorSpec::rgb(40, 105, 131),  // Pine
            function_key: ColorSpec::rgb(144, 122, 169), // Iris
            equals_key: ColorSpec::rgb(86, 148, 159),    // Foam
            display: ColorSpec::rgb(180, 99, 122),       // Love
            expression: ColorSpec::rgb(152, 147, 165),   // Muted
            text: ColorSpec::rgb(87, 82, 121),           // Text
            text_muted: ColorSpec::rgb(152, 147, 165),   // Muted
            success: ColorSpec::rgb(86, 148, 159),       // Foam
            error: ColorSpec::rgb(180, 99, 122),         // Love
            border_active: ColorSpec::rgb(215, 130, 126), // Rose
            border_normal: ColorSpec::rgb(152, 147, 165), // Muted
            highlight_bg: ColorSpec::rgb(215, 130, 126), // Rose
            highlight_fg: ColorSpec::rgb(250, 244, 237), // Base
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            digit_key: ColorSpec::rgb(248, 248, 242),    // Foreground
            operator_key: ColorSpec::rgb(139, 233, 253), // Cyan
            function_key: ColorSpec::rgb(189, 147, 249), // Purple
            equals_key: ColorSpec::rgb(80, 250, 123),    // Green
            display: ColorSpec::rgb(255, 121, 198),      // Pink
            expression: ColorSpec::rgb(98, 114, 164),    // Comment
            text: ColorSpec::rgb(248, 248, 242),         // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),    // Comment
            success: ColorSpec::rgb(80, 250, 123),       // Green
            error: ColorSpec::rgb(255, 85, 85),          // Red
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164), // Comment
            highlight_bg: ColorSpec::rgb(189, 147, 249), // Purple
            highlight_fg: ColorSpec::rgb(40, 42, 54),    // Background
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            digit_key: ColorSpec::rgb(205, 214, 244),    // Text
            operator_key: ColorSpec::rgb(137, 180, 250), // Blue
            function_key: ColorSpec::rgb(203, 166, 247), // Mauve
            equals_key: ColorSpec::rgb(166, 227, 161),   // Green
            display: ColorSpec::rgb(245, 194, 231),      // Pink
            expression: ColorSpec::rgb(127, 132, 156),   // Overlay1
            text: ColorSpec::rgb(205, 214, 244),         // Text
            text_muted: ColorSpec::rgb(127, 132, 156),   // Overlay1
            success: ColorSpec::rgb(166, 227, 161),      // Green
            error: ColorSpec::rgb(243, 139, 168),        // Red
            border_active: ColorSpec::rgb(137, 180, 250), // Blue
            border_normal: ColorSpec::rgb(108, 112, 134), // Overlay0
            highlight_bg: ColorSpec::rgb(137, 180, 250), // Blue
            highlight_fg: ColorSpec::rgb(30, 30, 46),    // Base
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }

    /// Return the theme following this one in `available_themes`, wrapping around.
    ///
    pub fn next(&self) -> Self {
        let themes = Self::available_themes();
        let index = themes
            .iter()
            .position(|name| *name == self.name)
            .map_or(0, |index| (index + 1) % themes.len());
        Self::from_name(&themes[index]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let first = Theme::default();
        let mut theme = first.next();
        assert_ne!(theme.name, first.name);
        for _ in 1..Theme::available_themes().len() {
            theme = theme.next();
        }
        assert_eq!(theme.name, first.name);
    }

    #[test]
    fn test_color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
