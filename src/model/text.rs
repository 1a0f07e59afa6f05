//! Text content model
//!
//! A label shows either plain text (styled by the label) or pre-styled text
//! that carries its own span styles.

use ratatui::text::Text;

/// Content of a label
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Unstyled string; the label's font and color apply
    Plain(String),
    /// Pre-styled text; span styles are patched over the label's base style
    Styled(Text<'static>),
}

impl TextContent {
    /// True when there is not a single character to show
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(s) => s.is_empty(),
            Self::Styled(text) => styled_is_empty(text),
        }
    }

    /// Flattened characters, without styling
    pub fn as_plain(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Styled(text) => text
                .lines
                .iter()
                .map(|line| {
                    line.spans
                        .iter()
                        .map(|span| span.content.as_ref())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Convert into renderable text
    pub fn to_text(&self) -> Text<'static> {
        match self {
            Self::Plain(s) => Text::from(s.clone()),
            Self::Styled(text) => text.clone(),
        }
    }
}

/// True when a styled text has no characters in any span
pub fn styled_is_empty(text: &Text<'_>) -> bool {
    text.lines
        .iter()
        .all(|line| line.spans.iter().all(|span| span.content.is_empty()))
}

/// Pick the content to display from a plain and a styled source.
///
/// Non-empty styled text wins over plain text; empty sources yield `None`.
pub fn resolve(plain: Option<&str>, styled: Option<&Text<'static>>) -> Option<TextContent> {
    if let Some(text) = styled.filter(|t| !styled_is_empty(t)) {
        return Some(TextContent::Styled(text.clone()));
    }
    plain
        .filter(|s| !s.is_empty())
        .map(|s| TextContent::Plain(s.to_string()))
}
