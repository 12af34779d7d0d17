use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette used by every screen.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub warning: ColorSpec,
    pub error: ColorSpec,

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

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(161, 119, 255),      // Purple
            secondary: rgb(59, 247, 209),     // Pine
            accent: rgb(255, 109, 146),       // Pink
            text: rgb(88, 82, 96),            // Text
            text_muted: rgb(152, 147, 165),   // Muted
            warning: rgb(255, 210, 0),        // Gold
            error: rgb(235, 111, 146),        // Love
            border_active: rgb(161, 119, 255), // Purple
            border_normal: rgb(88, 82, 96),   // Text
            highlight_bg: rgb(61, 174, 233),  // Foam
            highlight_fg: rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),      // Purple
            secondary: rgb(80, 250, 123),     // Green
            accent: rgb(255, 121, 198),       // Pink
            text: rgb(248, 248, 242),         // Foreground
            text_muted: rgb(98, 114, 164),    // Comment
            warning: rgb(241, 250, 140),      // Yellow
            error: rgb(255, 85, 85),          // Red
            border_active: rgb(189, 147, 249), // Purple
            border_normal: rgb(98, 114, 164), // Comment
            highlight_bg: rgb(68, 71, 90),    // Current line
            highlight_fg: rgb(248, 248, 242),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),      // Blue
            secondary: rgb(158, 206, 106),    // Green
            accent: rgb(255, 159, 196),       // Pink
            text: rgb(169, 177, 214),         // Foreground
            text_muted: rgb(117, 121, 148),   // Comment
            warning: rgb(255, 202, 40),       // Yellow
            error: rgb(247, 118, 142),        // Red
            border_active: rgb(125, 207, 255), // Blue
            border_normal: rgb(117, 121, 148), // Comment
            highlight_bg: rgb(125, 207, 255), // Blue
            highlight_fg: rgb(26, 27, 38),    // Background
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}
