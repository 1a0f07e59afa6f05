//! Text label element
//!
//! Used for the placeholder title and body. Wraps on word boundaries with no
//! line limit, so its height is the wrapped line count.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::Element;
use crate::model::TextContent;
use crate::ui::theme;

/// Label state
#[derive(Debug, Clone)]
pub struct Label {
    pub content: Option<TextContent>,
    /// Base modifiers ("font"): bold, italic, ...
    pub font: Style,
    pub color: Color,
    pub alignment: Alignment,
    pub hidden: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self::new(theme::text::CONTENT_FONT)
    }
}

impl Label {
    /// Create an empty, hidden label with the given font
    pub fn new(font: Style) -> Self {
        Self {
            content: None,
            font,
            color: theme::text::COLOR,
            alignment: Alignment::Center,
            hidden: true,
        }
    }

    /// Create a visible label showing plain text
    pub fn plain(text: impl Into<String>) -> Self {
        let mut label = Self::default();
        label.set_content(Some(TextContent::Plain(text.into())));
        label
    }

    /// Replace the content; the label hides itself when there is nothing to show
    pub fn set_content(&mut self, content: Option<TextContent>) {
        self.hidden = content.as_ref().is_none_or(TextContent::is_empty);
        self.content = content;
    }

    /// Characters currently displayed, without styling
    pub fn text(&self) -> Option<String> {
        self.content.as_ref().map(TextContent::as_plain)
    }

    fn paragraph(&self) -> Option<Paragraph<'static>> {
        let content = self.content.as_ref()?;
        Some(
            Paragraph::new(content.to_text())
                .style(self.font.fg(self.color))
                .alignment(self.alignment)
                .wrap(Wrap { trim: true }),
        )
    }
}

impl Element for Label {
    fn height(&self, width: u16) -> u16 {
        self.paragraph()
            .map(|p| u16::try_from(p.line_count(width)).unwrap_or(u16::MAX))
            .unwrap_or(0)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if let Some(paragraph) = self.paragraph() {
            paragraph.render(area, buf);
        }
    }
}
