//! Domain models
//!
//! Plain data describing what a placeholder shows.

mod image;
mod style;
pub mod text;

pub use image::{Icon, Image};
pub use style::PlaceholderStyle;
pub use text::TextContent;

use std::io;
use thiserror::Error;

/// Errors raised by fallible placeholder helpers
#[derive(Error, Debug)]
pub enum PlaceholderError {
    #[error("Image art is empty: {0}")]
    EmptyImage(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
