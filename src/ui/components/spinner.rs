//! Spinner element
//!
//! The frame only advances on [`Spinner::tick`]; the host's event loop
//! owns the timing.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};

use super::Element;
use crate::ui::{symbols, theme};

/// Spinner state
#[derive(Debug, Clone)]
pub struct Spinner {
    pub color: Option<Color>,
    pub hides_when_stopped: bool,
    animating: bool,
    frame: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            color: None,
            hides_when_stopped: true,
            animating: false,
            frame: 0,
        }
    }

    pub fn start(&mut self) {
        self.animating = true;
    }

    pub fn stop(&mut self) {
        self.animating = false;
        self.frame = 0;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current frame index
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance one frame while animating
    pub fn tick(&mut self) {
        if self.animating {
            self.frame = (self.frame + 1) % symbols::spinner::FRAMES.len();
        }
    }

    fn glyph(&self) -> &'static str {
        symbols::spinner::FRAMES[self.frame % symbols::spinner::FRAMES.len()]
    }
}

impl Element for Spinner {
    fn height(&self, _width: u16) -> u16 {
        1
    }

    fn is_hidden(&self) -> bool {
        self.hides_when_stopped && !self.animating
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let color = self.color.unwrap_or(theme::SPINNER);
        Line::styled(self.glyph(), Style::default().fg(color))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_while_stopped() {
        let mut spinner = Spinner::new();
        assert!(spinner.is_hidden());
        spinner.start();
        assert!(!spinner.is_hidden());
        spinner.stop();
        assert!(spinner.is_hidden());
    }

    #[test]
    fn test_visible_when_not_hiding() {
        let mut spinner = Spinner::new();
        spinner.hides_when_stopped = false;
        assert!(!spinner.is_hidden());
    }

    #[test]
    fn test_tick_only_while_animating() {
        let mut spinner = Spinner::new();
        spinner.tick();
        assert_eq!(spinner.frame(), 0);

        spinner.start();
        spinner.tick();
        spinner.tick();
        assert_eq!(spinner.frame(), 2);
    }

    #[test]
    fn test_tick_wraps_around() {
        let mut spinner = Spinner::new();
        spinner.start();
        for _ in 0..symbols::spinner::FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.frame(), 0);
    }

    #[test]
    fn test_stop_resets_frame() {
        let mut spinner = Spinner::new();
        spinner.start();
        spinner.tick();
        spinner.stop();
        assert_eq!(spinner.frame(), 0);
    }

    #[test]
    fn test_render_uses_color() {
        let mut spinner = Spinner::new();
        spinner.color = Some(Color::Yellow);
        spinner.start();

        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        spinner.render(area, &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), symbols::spinner::FRAMES[0]);
        assert_eq!(buf[(1, 0)].fg, Color::Yellow);
    }
}
