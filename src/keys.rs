//! Keybinding definitions
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key is Ctrl+C (quit from anywhere)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (demo application)
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Scrolling keys
// =============================================================================

/// Scroll up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Scroll one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Scroll one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Button keys
// =============================================================================

/// Focus the next visible button
pub const FOCUS_NEXT: KeyCode = KeyCode::Tab;

/// Focus the previous visible button
pub const FOCUS_PREV: KeyCode = KeyCode::BackTab;

/// Tap the focused button
pub const ACTIVATE: KeyCode = KeyCode::Enter;

/// Tap the focused button (alternative)
pub const ACTIVATE_ALT: KeyCode = KeyCode::Char(' ');

/// Check if key taps the focused button (Enter or Space)
pub fn is_activate(code: KeyCode) -> bool {
    matches!(code, ACTIVATE | ACTIVATE_ALT)
}

// =============================================================================
// Demo keys
// =============================================================================

/// Switch to the loading style
pub const STYLE_LOADING: KeyCode = KeyCode::Char('l');

/// Switch to the error style (records a sample error)
pub const STYLE_ERROR: KeyCode = KeyCode::Char('e');

/// Switch to the empty style
pub const STYLE_EMPTY: KeyCode = KeyCode::Char('m');

/// Back to the neutral style
pub const STYLE_NONE: KeyCode = KeyCode::Char('n');

/// Toggle content centering
pub const TOGGLE_CENTERED: KeyCode = KeyCode::Char('c');

/// Increase spacing between elements
pub const SPACING_MORE: KeyCode = KeyCode::Char('+');

/// Decrease spacing between elements
pub const SPACING_LESS: KeyCode = KeyCode::Char('-');

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint shown in the demo status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

/// Hints for the demo status bar
pub const DEMO_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "l",
        label: "loading",
    },
    KeyHint {
        key: "e",
        label: "error",
    },
    KeyHint {
        key: "m",
        label: "empty",
    },
    KeyHint {
        key: "n",
        label: "none",
    },
    KeyHint {
        key: "Tab",
        label: "focus",
    },
    KeyHint {
        key: "Enter",
        label: "tap",
    },
    KeyHint {
        key: "c",
        label: "center",
    },
    KeyHint {
        key: "+/-",
        label: "spacing",
    },
    KeyHint {
        key: "q",
        label: "quit",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_move_up() {
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_up(KeyCode::Up));
        assert!(!is_move_up(KeyCode::Char('j')));
    }

    #[test]
    fn test_is_move_down() {
        assert!(is_move_down(KeyCode::Char('j')));
        assert!(is_move_down(KeyCode::Down));
        assert!(!is_move_down(KeyCode::Up));
    }

    #[test]
    fn test_is_activate() {
        assert!(is_activate(KeyCode::Enter));
        assert!(is_activate(KeyCode::Char(' ')));
        assert!(!is_activate(KeyCode::Tab));
    }

    #[test]
    fn test_interrupt_key() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt_key(&key));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt_key(&key));
    }

    #[test]
    fn test_demo_keys_do_not_collide_with_view_keys() {
        for code in [STYLE_LOADING, STYLE_ERROR, STYLE_EMPTY, STYLE_NONE, TOGGLE_CENTERED] {
            assert!(!is_move_up(code));
            assert!(!is_move_down(code));
            assert!(!is_activate(code));
            assert_ne!(code, GO_TOP);
            assert_ne!(code, GO_BOTTOM);
        }
    }
}
