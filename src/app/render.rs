//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::App;
use crate::ui::widgets::{StatusInfo, render_status_bar, status_bar_area};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let main_area = match status_bar_area(area) {
            Some(_) => Rect {
                height: area.height - 1,
                ..area
            },
            None => area,
        };

        self.placeholder.render(frame, main_area);
        render_status_bar(frame, &self.status_info());
    }

    /// State summary for the status bar
    pub fn status_info(&self) -> StatusInfo {
        StatusInfo {
            style: self.placeholder.style(),
            is_centered: self.placeholder.is_centered(),
            spacing: self.placeholder.spacing(),
            message: self.message.clone(),
        }
    }
}
