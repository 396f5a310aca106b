// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "mono" avoids color entirely for limited terminals.

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Panel identity colors
    pub quote_accent: Color,
    pub fact_accent: Color,

    // Content colors
    pub text: Color,
    pub author: Color,
    pub counter: Color,

    // Notification levels
    pub success: Color,
    pub error: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub status_bar: Color,
    pub favorite: Color,
    pub loading: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to "dark"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" => Self::mono(),
            _ => Self::dark(),
        }
    }

    /// Dark theme - terminal's ANSI palette, dark-background friendly
    pub fn dark() -> Self {
        Self {
            name: "dark",
            quote_accent: Color::Blue,
            fact_accent: Color::Green,
            text: Color::White,
            author: Color::Gray,
            counter: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::DarkGray,
            favorite: Color::Yellow,
            loading: Color::Yellow,
        }
    }

    /// Light theme - for light-background terminals
    pub fn light() -> Self {
        Self {
            name: "light",
            quote_accent: Color::Blue,
            fact_accent: Color::Green,
            text: Color::Black,
            author: Color::DarkGray,
            counter: Color::Gray,
            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::Gray,
            favorite: Color::Magenta,
            loading: Color::Magenta,
        }
    }

    /// Monochrome - no color, for limited terminals
    pub fn mono() -> Self {
        Self {
            name: "mono",
            quote_accent: Color::Reset,
            fact_accent: Color::Reset,
            text: Color::Reset,
            author: Color::Reset,
            counter: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            info: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            title: Color::Reset,
            status_bar: Color::Reset,
            favorite: Color::Reset,
            loading: Color::Reset,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::by_name("nonexistent").name, "dark");
        assert_eq!(Theme::by_name("LIGHT").name, "light");
        assert_eq!(Theme::by_name("mono").name, "mono");
    }
}
