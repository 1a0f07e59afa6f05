//! Demo application module
//!
//! Hosts a full-screen placeholder, split into:
//! - `state`: App struct and the configured placeholder
//! - `input`: Key event handling and idle ticks
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::{App, DemoError};
