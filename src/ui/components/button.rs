//! Button element
//!
//! A one-row tappable label with an optional icon. Taps come from the
//! keyboard: the placeholder moves focus between visible buttons and
//! activates the focused one.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::Element;
use crate::model::Icon;
use crate::ui::{symbols, theme};

/// Callback invoked when a button is tapped
pub type ButtonAction = Box<dyn FnMut(&Button)>;

/// Visual treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Filled with the tint color
    #[default]
    Solid,
    /// Tinted label only
    Transparent,
    /// Tinted label between brackets
    Bordered,
}

/// Which of the placeholder's two buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Primary,
    Secondary,
}

impl ButtonRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Button state
pub struct Button {
    pub style: ButtonStyle,
    pub tint: Option<Color>,
    pub title: Option<String>,
    pub image: Option<Icon>,
    pub hidden: bool,
    pub focused: bool,
    action: Option<ButtonAction>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("style", &self.style)
            .field("tint", &self.tint)
            .field("title", &self.title)
            .field("image", &self.image)
            .field("hidden", &self.hidden)
            .field("focused", &self.focused)
            .field("action", &self.action.as_ref().map(|_| "<closure>"))
            .finish()
    }
}

impl Button {
    /// Create an empty, hidden button
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            tint: None,
            title: None,
            image: None,
            hidden: true,
            focused: false,
            action: None,
        }
    }

    /// True when there is a non-empty title or an icon to show
    pub fn has_content(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty()) || self.image.is_some()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn set_action(&mut self, action: Option<ButtonAction>) {
        self.action = action;
    }

    /// Invoke the tap callback. Hidden buttons ignore taps.
    ///
    /// Returns true when the tap was delivered to a callback.
    pub fn tap(&mut self) -> bool {
        if self.hidden {
            return false;
        }
        let Some(mut action) = self.action.take() else {
            return false;
        };
        action(self);
        self.action = Some(action);
        true
    }

    fn tint_color(&self) -> Color {
        self.tint.unwrap_or(theme::button::TINT)
    }

    fn build_line(&self) -> Line<'static> {
        let mut label = String::new();
        if let Some(icon) = &self.image {
            label.push_str(icon.glyph());
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            if !label.is_empty() {
                label.push_str(symbols::button::ICON_GAP);
            }
            label.push_str(title);
        }

        let tint = self.tint_color();
        let mut style = match self.style {
            ButtonStyle::Solid => Style::default().fg(theme::button::SOLID_LABEL).bg(tint),
            ButtonStyle::Transparent | ButtonStyle::Bordered => Style::default().fg(tint),
        };
        if self.focused {
            style = style.add_modifier(theme::button::FOCUSED);
        }

        let spans = match self.style {
            ButtonStyle::Solid => vec![Span::styled(format!(" {} ", label), style)],
            ButtonStyle::Transparent => vec![Span::styled(label, style)],
            ButtonStyle::Bordered => vec![
                Span::styled(symbols::button::OPEN, Style::default().fg(tint)),
                Span::styled(label, style),
                Span::styled(symbols::button::CLOSE, Style::default().fg(tint)),
            ],
        };
        Line::from(spans).alignment(Alignment::Center)
    }
}

impl Element for Button {
    fn height(&self, _width: u16) -> u16 {
        1
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.build_line().render(area, buf);
    }
}
