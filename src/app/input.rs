//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, DemoError, DemoEvent, RETRY_TICKS};
use crate::keys;
use crate::model::PlaceholderStyle;
use crate::ui::views::PlaceholderAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::STYLE_LOADING => self.show_style(Some(PlaceholderStyle::Loading)),
            keys::STYLE_ERROR => {
                self.retry_ticks = None;
                self.placeholder.set_error(DemoError::NetworkUnreachable);
            }
            keys::STYLE_EMPTY => self.show_style(Some(PlaceholderStyle::Empty)),
            keys::STYLE_NONE => {
                self.placeholder.clear_error();
                self.show_style(None);
            }
            keys::TOGGLE_CENTERED => {
                let centered = self.placeholder.is_centered();
                self.placeholder.set_centered(!centered);
            }
            keys::SPACING_MORE => {
                let spacing = self.placeholder.spacing();
                self.placeholder.set_spacing(spacing.saturating_add(1));
            }
            keys::SPACING_LESS => {
                let spacing = self.placeholder.spacing();
                self.placeholder.set_spacing(spacing.saturating_sub(1));
            }
            _ => {
                if let PlaceholderAction::Tapped(role) = self.placeholder.handle_key(key) {
                    tracing::debug!(button = role.label(), "demo button activated");
                }
            }
        }

        self.drain_events();
    }

    /// Idle processing: animate the spinner and finish simulated retries
    pub fn on_tick(&mut self) {
        self.placeholder.tick();

        let Some(ticks) = self.retry_ticks else {
            return;
        };
        if ticks + 1 >= RETRY_TICKS {
            self.retry_ticks = None;
            self.placeholder.clear_error();
            self.placeholder.set_style(Some(PlaceholderStyle::Empty));
            self.message = Some("Nothing new".to_string());
        } else {
            self.retry_ticks = Some(ticks + 1);
        }
    }

    fn show_style(&mut self, style: Option<PlaceholderStyle>) {
        self.retry_ticks = None;
        self.placeholder.set_style(style);
    }

    /// Apply button taps forwarded by the placeholder callbacks
    pub(crate) fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                DemoEvent::Retry => {
                    self.message = Some("Retrying…".to_string());
                    self.placeholder.set_style(Some(PlaceholderStyle::Loading));
                    self.retry_ticks = Some(0);
                }
                DemoEvent::Dismiss => {
                    self.message = Some("Dismissed".to_string());
                    self.placeholder.clear_error();
                    self.show_style(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::ui::components::ButtonRole;
    use crate::ui::views::ElementId;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, keys::QUIT);
        assert!(!app.running);

        let mut app = App::default();
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_style_keys() {
        let mut app = App::default();
        press(&mut app, keys::STYLE_LOADING);
        assert_eq!(app.placeholder.style(), Some(PlaceholderStyle::Loading));

        press(&mut app, keys::STYLE_EMPTY);
        assert_eq!(app.placeholder.style(), Some(PlaceholderStyle::Empty));

        press(&mut app, keys::STYLE_NONE);
        assert_eq!(app.placeholder.style(), None);
    }

    #[test]
    fn test_error_key_shows_sample_error() {
        let mut app = App::default();
        press(&mut app, keys::STYLE_ERROR);
        assert_eq!(app.placeholder.style(), Some(PlaceholderStyle::Error));
        assert_eq!(
            app.placeholder.body_text().as_deref(),
            Some("Network unreachable")
        );
    }

    #[test]
    fn test_layout_keys() {
        let mut app = App::default();
        press(&mut app, keys::TOGGLE_CENTERED);
        assert!(!app.placeholder.is_centered());

        let spacing = app.placeholder.spacing();
        press(&mut app, keys::SPACING_MORE);
        assert_eq!(app.placeholder.spacing(), spacing + 1);
        press(&mut app, keys::SPACING_LESS);
        press(&mut app, keys::SPACING_LESS);
        assert_eq!(app.placeholder.spacing(), spacing.saturating_sub(1));
    }

    #[test]
    fn test_retry_runs_loading_then_empty() {
        let mut app = App::default();
        press(&mut app, keys::STYLE_ERROR);
        press(&mut app, keys::FOCUS_NEXT);
        assert_eq!(app.placeholder.focused_button(), Some(ButtonRole::Primary));

        press(&mut app, keys::ACTIVATE);
        assert_eq!(app.placeholder.style(), Some(PlaceholderStyle::Loading));
        assert!(app.placeholder.is_visible(ElementId::Spinner));

        for _ in 0..RETRY_TICKS {
            app.on_tick();
        }
        assert_eq!(app.placeholder.style(), Some(PlaceholderStyle::Empty));
        assert!(app.placeholder.error().is_none());
        assert_eq!(app.message.as_deref(), Some("Nothing new"));
    }

    #[test]
    fn test_dismiss_returns_to_neutral() {
        let mut app = App::default();
        press(&mut app, keys::FOCUS_NEXT);
        press(&mut app, keys::FOCUS_NEXT);
        assert_eq!(
            app.placeholder.focused_button(),
            Some(ButtonRole::Secondary)
        );

        press(&mut app, keys::ACTIVATE);
        assert_eq!(app.placeholder.style(), None);
        assert_eq!(app.message.as_deref(), Some("Dismissed"));
    }

    #[test]
    fn test_style_key_cancels_retry() {
        let mut app = App::default();
        app.placeholder.tap(ButtonRole::Primary);
        app.drain_events();
        assert_eq!(app.retry_ticks, Some(0));

        press(&mut app, keys::STYLE_NONE);
        assert_eq!(app.retry_ticks, None);
        for _ in 0..RETRY_TICKS {
            app.on_tick();
        }
        assert_eq!(app.placeholder.style(), None);
    }
}
