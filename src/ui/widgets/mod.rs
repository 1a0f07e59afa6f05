//! Reusable UI widgets

mod status_bar;

pub use status_bar::{StatusInfo, build_status_bar, render_status_bar, status_bar_area};
