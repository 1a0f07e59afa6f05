//! Placeholder style model
//!
//! The display mode chosen by the host. `None` on the view means neutral.

use std::fmt;

/// Display mode of a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// Work in progress: spinner only
    Loading,
    /// Something failed: body shows the error, primary button stays for retry
    Error,
    /// Nothing to show: no actions offered
    Empty,
}

impl PlaceholderStyle {
    /// All styles in display order
    pub const ALL: [PlaceholderStyle; 3] = [Self::Loading, Self::Error, Self::Empty];

    /// Short label for status lines and logs
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Empty => "empty",
        }
    }

    /// Whether the spinner must be shown in this style
    pub fn shows_spinner(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the primary button is forced hidden
    pub fn hides_primary_button(self) -> bool {
        matches!(self, Self::Loading | Self::Empty)
    }

    /// Whether the secondary button is forced hidden
    pub fn hides_secondary_button(self) -> bool {
        // Every style demotes the secondary action
        true
    }

    /// Whether the image is forced hidden regardless of content
    pub fn hides_image(self) -> bool {
        matches!(self, Self::Loading | Self::Empty)
    }

    /// Whether the title is forced hidden
    pub fn hides_heading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
