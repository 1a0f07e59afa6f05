//! Centering scroll container geometry
//!
//! A plain scroll area pins its content to the top-left corner. This one
//! pads the content with symmetric insets on every axis where the content
//! is smaller than the viewport, so it renders centered. Insets are
//! recomputed on every geometry change.

use ratatui::layout::{Position, Size};

/// Padding applied around the scrolled content, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u16,
    pub left: u16,
    pub bottom: u16,
    pub right: u16,
}

impl Insets {
    /// Symmetric insets: `vertical` on top and bottom, `horizontal` on both sides
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }
}

/// Scroll state plus centering insets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenteringScroll {
    is_centered: bool,
    viewport: Size,
    content_size: Size,
    inset: Insets,
    offset: Position,
}

impl Default for CenteringScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl CenteringScroll {
    /// Create a centering container with an empty viewport
    pub fn new() -> Self {
        Self {
            is_centered: true,
            viewport: Size::default(),
            content_size: Size::default(),
            inset: Insets::default(),
            offset: Position::default(),
        }
    }

    pub fn is_centered(&self) -> bool {
        self.is_centered
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn inset(&self) -> Insets {
        self.inset
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Enable or disable centering
    pub fn set_centered(&mut self, is_centered: bool) {
        self.is_centered = is_centered;
        self.update_content_inset();
    }

    /// Record the visible area size
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.update_content_inset();
    }

    /// Record the measured content size
    pub fn set_content_size(&mut self, content_size: Size) {
        self.content_size = content_size;
        self.update_content_inset();
    }

    /// Scroll by a signed number of cells on each axis
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let x = i32::from(self.offset.x).saturating_add(dx);
        let y = i32::from(self.offset.y).saturating_add(dy);
        self.offset = Position::new(clamp_to_u16(x), clamp_to_u16(y));
        self.clamp_offset();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset.y = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset.y = self.max_offset().y;
    }

    /// Largest offset that keeps the viewport filled
    pub fn max_offset(&self) -> Position {
        let scrolled_width = self
            .content_size
            .width
            .saturating_add(self.inset.left)
            .saturating_add(self.inset.right);
        let scrolled_height = self
            .content_size
            .height
            .saturating_add(self.inset.top)
            .saturating_add(self.inset.bottom);
        Position::new(
            scrolled_width.saturating_sub(self.viewport.width),
            scrolled_height.saturating_sub(self.viewport.height),
        )
    }

    /// Whether the content overflows the viewport vertically
    pub fn can_scroll(&self) -> bool {
        self.max_offset().y > 0
    }

    /// Viewport coordinates of content cell (0, 0); negative when scrolled past it
    pub fn content_origin(&self) -> (i32, i32) {
        (
            i32::from(self.inset.left) - i32::from(self.offset.x),
            i32::from(self.inset.top) - i32::from(self.offset.y),
        )
    }

    fn update_content_inset(&mut self) {
        self.inset = if self.is_centered {
            let left = centered_inset(self.viewport.width, self.content_size.width);
            let top = centered_inset(self.viewport.height, self.content_size.height);
            Insets::symmetric(top, left)
        } else {
            Insets::default()
        };
        tracing::trace!(
            viewport = ?self.viewport,
            content = ?self.content_size,
            inset = ?self.inset,
            "content inset updated"
        );
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.offset.x = self.offset.x.min(max.x);
        self.offset.y = self.offset.y.min(max.y);
    }
}

/// Inset that centers `content` within `viewport` on one axis
fn centered_inset(viewport: u16, content: u16) -> u16 {
    if content < viewport {
        (viewport - content) / 2
    } else {
        0
    }
}

fn clamp_to_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}
