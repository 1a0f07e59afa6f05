//! Input handling for PlaceholderView

use crossterm::event::KeyEvent;

use super::PlaceholderView;
use crate::keys;
use crate::ui::components::ButtonRole;

/// Action returned by PlaceholderView key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    /// Key not handled by the placeholder
    None,
    /// Scroll position may have changed
    Scrolled,
    /// Focus moved (or was cleared when no button is visible)
    Focused(Option<ButtonRole>),
    /// The focused button was activated
    Tapped(ButtonRole),
}

impl PlaceholderView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> PlaceholderAction {
        match key.code {
            k if keys::is_move_up(k) => {
                self.scroll.scroll_by(0, -1);
                PlaceholderAction::Scrolled
            }
            k if keys::is_move_down(k) => {
                self.scroll.scroll_by(0, 1);
                PlaceholderAction::Scrolled
            }
            keys::PAGE_UP => {
                let page = i32::from(self.scroll.viewport().height.max(1));
                self.scroll.scroll_by(0, -page);
                PlaceholderAction::Scrolled
            }
            keys::PAGE_DOWN => {
                let page = i32::from(self.scroll.viewport().height.max(1));
                self.scroll.scroll_by(0, page);
                PlaceholderAction::Scrolled
            }
            keys::GO_TOP => {
                self.scroll.scroll_to_top();
                PlaceholderAction::Scrolled
            }
            keys::GO_BOTTOM => {
                self.scroll.scroll_to_bottom();
                PlaceholderAction::Scrolled
            }
            keys::FOCUS_NEXT => PlaceholderAction::Focused(self.cycle_focus(true)),
            keys::FOCUS_PREV => PlaceholderAction::Focused(self.cycle_focus(false)),
            k if keys::is_activate(k) => {
                let focus = self.focus;
                match focus {
                    Some(role) if self.tap(role) => PlaceholderAction::Tapped(role),
                    _ => PlaceholderAction::None,
                }
            }
            _ => PlaceholderAction::None,
        }
    }

    /// Move focus to the next (or previous) visible button, wrapping around
    fn cycle_focus(&mut self, forward: bool) -> Option<ButtonRole> {
        let focusable = self.focusable();
        if focusable.is_empty() {
            self.set_focus(None);
            return None;
        }

        let len = focusable.len();
        let next = match self
            .focus
            .and_then(|role| focusable.iter().position(|r| *r == role))
        {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        let role = focusable[next];
        self.set_focus(Some(role));
        Some(role)
    }
}
