//! Image and icon models
//!
//! Terminal "images" are pre-drawn cell art. Icons are short glyphs shown
//! in front of button titles.

use std::fs;
use std::path::Path;

use ratatui::text::{Line, Text};

use super::PlaceholderError;

/// Multi-line cell art
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    art: Text<'static>,
}

impl Image {
    /// Create an image from already styled text
    pub fn new(art: impl Into<Text<'static>>) -> Self {
        Self { art: art.into() }
    }

    /// Create an image from plain art, one row per line
    pub fn from_art(art: &str) -> Self {
        let lines: Vec<Line<'static>> = art
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        Self {
            art: Text::from(lines),
        }
    }

    /// Load plain art from a UTF-8 text file
    ///
    /// Trailing blank lines are dropped. A file without any visible
    /// character is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlaceholderError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let trimmed = raw.trim_end();
        if trimmed.trim().is_empty() {
            return Err(PlaceholderError::EmptyImage(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "loaded placeholder art");
        Ok(Self::from_art(trimmed))
    }

    /// The art to render
    pub fn art(&self) -> &Text<'static> {
        &self.art
    }

    /// Number of rows of art
    pub fn height(&self) -> u16 {
        u16::try_from(self.art.lines.len()).unwrap_or(u16::MAX)
    }

    /// Width of the widest row, in cells
    pub fn width(&self) -> u16 {
        u16::try_from(self.art.width()).unwrap_or(u16::MAX)
    }
}

/// Short glyph used as a button image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    /// Create an icon from a glyph string
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// The glyph text
    pub fn glyph(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}
