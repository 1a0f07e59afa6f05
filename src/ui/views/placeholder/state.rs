//! Style state machine
//!
//! Visibility of every built-in element is a pure function of the current
//! style, the content values and the loading flag. The whole pass runs on
//! every relevant write, so re-entering a style yields the same result.

use super::PlaceholderView;
use crate::model::{PlaceholderStyle, TextContent, text};
use crate::ui::components::ButtonRole;

impl PlaceholderView {
    /// Recompute element contents and visibility
    pub(super) fn update_visibility(&mut self) {
        let style = self.style;
        let forced = |rule: fn(PlaceholderStyle) -> bool| style.is_some_and(rule);

        // Image: needs art, hidden while loading or empty
        self.image_view.hidden =
            self.image_view.image.is_none() || forced(PlaceholderStyle::hides_image);

        // Spinner: animates while loading, hides itself when stopped
        if self.is_loading || forced(PlaceholderStyle::shows_spinner) {
            self.spinner.start();
        } else {
            self.spinner.stop();
        }

        // Title
        self.title_label.set_content(text::resolve(
            self.title.as_deref(),
            self.attributed_title.as_ref(),
        ));
        if forced(PlaceholderStyle::hides_heading) {
            self.title_label.hidden = true;
        }

        // Body: the failure description replaces the body in the error style
        let body = match (&self.error, style) {
            (Some(error), Some(PlaceholderStyle::Error)) => {
                Some(TextContent::Plain(error.to_string()))
            }
            _ => text::resolve(self.content.as_deref(), self.attributed_content.as_ref()),
        };
        self.content_label.set_content(body);

        // Buttons: need a title or icon, then the style decides
        self.primary_button.hidden = !self.primary_button.has_content()
            || forced(PlaceholderStyle::hides_primary_button);
        self.secondary_button.hidden = !self.secondary_button.has_content()
            || forced(PlaceholderStyle::hides_secondary_button);

        self.sync_focus();
    }

    /// Visible buttons in focus order
    pub(super) fn focusable(&self) -> Vec<ButtonRole> {
        [ButtonRole::Primary, ButtonRole::Secondary]
            .into_iter()
            .filter(|role| !self.button(*role).hidden)
            .collect()
    }

    /// Move focus to `role` (or clear it) and mirror it on the buttons
    pub(super) fn set_focus(&mut self, role: Option<ButtonRole>) {
        self.focus = role;
        self.primary_button.focused = role == Some(ButtonRole::Primary);
        self.secondary_button.focused = role == Some(ButtonRole::Secondary);
    }

    /// Drop focus from a button that became hidden
    fn sync_focus(&mut self) {
        let Some(role) = self.focus else {
            return;
        };
        if self.button(role).hidden {
            let next = self.focusable().first().copied();
            self.set_focus(next);
        }
    }

    /// Button that receives Enter / Space
    pub fn focused_button(&self) -> Option<ButtonRole> {
        self.focus
    }
}
