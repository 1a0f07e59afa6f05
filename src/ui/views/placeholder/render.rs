//! Rendering for PlaceholderView
//!
//! The stack is drawn into an off-screen buffer the size of the content,
//! then the window selected by the centering insets and scroll offset is
//! copied into the frame.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Rect, Size},
};

use super::PlaceholderView;
use crate::ui::layout::padding;

impl PlaceholderView {
    /// Render the placeholder into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_to_buffer(area, frame.buffer_mut());
    }

    /// Render into an arbitrary buffer (also used by tests)
    pub fn render_to_buffer(&mut self, area: Rect, buf: &mut Buffer) {
        let content = self.layout_content(Size::new(area.width, area.height));

        let (origin_x, origin_y) = self.scroll.content_origin();
        for row in 0..area.height {
            for col in 0..area.width {
                let content_x = i32::from(col) - origin_x;
                let content_y = i32::from(row) - origin_y;
                let (Ok(content_x), Ok(content_y)) =
                    (u16::try_from(content_x), u16::try_from(content_y))
                else {
                    continue;
                };
                let Some(cell) = content.cell((content_x, content_y)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                    *target = cell.clone();
                }
            }
        }
    }

    /// Measure and draw the stack for a viewport; updates the scroll geometry
    fn layout_content(&mut self, viewport: Size) -> Buffer {
        self.scroll.set_viewport(viewport);

        let stack_width = viewport.width.saturating_sub(2 * padding::HORIZONTAL);
        let (slots, stack_height) = self.stack.layout(|id| {
            let element = self.element(*id)?;
            (!element.is_hidden()).then(|| element.height(stack_width))
        });

        let content_size = Size::new(
            viewport.width,
            stack_height.saturating_add(2 * padding::VERTICAL),
        );
        self.scroll.set_content_size(content_size);

        let content_area = Rect::new(0, 0, content_size.width, content_size.height);
        let mut content = Buffer::empty(content_area);
        for slot in slots {
            let Some(element) = self.element(slot.key) else {
                continue;
            };
            let area = Rect::new(
                padding::HORIZONTAL,
                padding::VERTICAL.saturating_add(slot.y),
                stack_width,
                slot.height,
            )
            .intersection(content_area);
            if !area.is_empty() {
                element.render(area, &mut content);
            }
        }
        content
    }
}
