//! Layout primitives
//!
//! - [`centering`]: scroll geometry that centers small content
//! - [`stack`]: vertical arrangement with per-gap spacing

pub mod centering;
pub mod stack;

pub use centering::{CenteringScroll, Insets};
pub use stack::{Slot, StackLayout};

/// Default gap between stacked elements (rows)
pub const DEFAULT_SPACING: u16 = 1;

/// Padding around the stack inside the scroll container
pub mod padding {
    /// Columns on the left and right of the stack
    pub const HORIZONTAL: u16 = 2;
    /// Rows above and below the stack
    pub const VERTICAL: u16 = 1;
}

/// Default image height as a fraction of the stack width
pub const DEFAULT_IMAGE_HEIGHT_RATIO: f32 = 0.5;

/// Width-to-height ratio of a terminal cell (cells are about twice as tall as wide)
pub const CELL_ASPECT: f32 = 0.5;
