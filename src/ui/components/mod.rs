//! Reusable UI components
//!
//! The content elements of a placeholder. Every element can measure itself
//! for a given width, report whether it is hidden and render into a buffer,
//! so the stack treats built-in and host-supplied elements alike.

pub mod button;
pub mod image_view;
pub mod label;
pub mod spinner;

pub use button::{Button, ButtonAction, ButtonRole, ButtonStyle};
pub use image_view::ImageView;
pub use label::Label;
pub use spinner::Spinner;

use ratatui::{buffer::Buffer, layout::Rect};

/// An element that can be arranged in a placeholder stack
pub trait Element {
    /// Natural height for the given width
    fn height(&self, width: u16) -> u16;

    /// Hidden elements take no space in the stack
    fn is_hidden(&self) -> bool {
        false
    }

    /// Draw the element into `area`
    fn render(&self, area: Rect, buf: &mut Buffer);
}
