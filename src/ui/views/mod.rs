//! View components
//!
//! Each view represents a screen (or a region of one) in the application.

mod placeholder;

pub use placeholder::{ElementId, PlaceholderAction, PlaceholderFailure, PlaceholderView};
