//! Image element
//!
//! Shows cell art, tinted, centered in a box whose height follows the
//! stack width.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use super::Element;
use crate::model::Image;
use crate::ui::layout::{CELL_ASPECT, DEFAULT_IMAGE_HEIGHT_RATIO};

/// Image element state
#[derive(Debug, Clone)]
pub struct ImageView {
    pub image: Option<Image>,
    pub tint: Option<Color>,
    /// Height as a fraction of the available width
    pub height_ratio: f32,
    pub hidden: bool,
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageView {
    pub fn new() -> Self {
        Self {
            image: None,
            tint: None,
            height_ratio: DEFAULT_IMAGE_HEIGHT_RATIO,
            hidden: true,
        }
    }

    /// Height of the image box for a given width
    ///
    /// Negative or NaN ratios collapse the box to zero rows.
    pub fn box_height(&self, width: u16) -> u16 {
        let rows = (f32::from(width) * self.height_ratio * CELL_ASPECT)
            .round()
            .max(0.0);
        if rows >= f32::from(u16::MAX) {
            u16::MAX
        } else {
            rows as u16
        }
    }
}

impl Element for ImageView {
    fn height(&self, width: u16) -> u16 {
        self.box_height(width)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(image) = &self.image else {
            return;
        };

        // Center the art vertically; clip when the box is too short
        let art_height = image.height().min(area.height);
        let top = (area.height - art_height) / 2;
        let art_area = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height: art_height,
        };

        let mut style = Style::default();
        if let Some(tint) = self.tint {
            style = style.fg(tint);
        }
        Paragraph::new(image.art().clone())
            .style(style)
            .alignment(Alignment::Center)
            .render(art_area, buf);
    }
}
