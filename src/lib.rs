//! Placeholder View - loading / error / empty states for ratatui
//!
//! A reusable widget that stacks an optional image, a spinner, a title, body
//! text and up to two buttons, centered in a scrollable area.
//!
//! This library provides:
//! - [`app`]: Demo application hosting the placeholder
//! - [`keys`]: Key binding definitions
//! - [`model`]: Styles, text content, images and icons
//! - [`ui`]: The placeholder view, its components and layout primitives

pub mod app;
pub mod keys;
pub mod model;
pub mod ui;

pub use model::{PlaceholderError, PlaceholderStyle};
pub use ui::views::{ElementId, PlaceholderView};
