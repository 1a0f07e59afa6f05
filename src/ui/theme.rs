//! Color theme definitions
//!
//! Centralized defaults for consistent placeholder appearance.

use ratatui::style::{Color, Modifier, Style};

/// Defaults for the title and body labels
pub mod text {
    use super::*;

    /// Default text color (terminal foreground)
    pub const COLOR: Color = Color::Reset;
    /// Title font: bold, standing out from the body
    pub const TITLE_FONT: Style = Style::new().add_modifier(Modifier::BOLD);
    /// Body font: regular
    pub const CONTENT_FONT: Style = Style::new();
}

/// Defaults for buttons
pub mod button {
    use super::*;

    /// Tint used when a button has no tint color set
    pub const TINT: Color = Color::Cyan;
    /// Label color on a solid (filled) button
    pub const SOLID_LABEL: Color = Color::Black;
    /// Extra modifiers for the focused button
    pub const FOCUSED: Modifier = Modifier::REVERSED;
}

/// Spinner color when no loading color is set
pub const SPINNER: Color = Color::Cyan;

/// Colors for the demo status line
pub mod status_bar {
    use super::*;

    pub const LABEL_FG: Color = Color::Black;
    pub const LABEL_BG: Color = Color::Cyan;
    pub const HINT: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_font_is_bold() {
        assert!(text::TITLE_FONT.add_modifier.contains(Modifier::BOLD));
        assert!(!text::CONTENT_FONT.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_labels_contrast_with_their_background() {
        assert_ne!(button::SOLID_LABEL, button::TINT);
        assert_ne!(status_bar::LABEL_FG, status_bar::LABEL_BG);
    }
}
