//! UI symbols (spinner frames, button brackets, default art)
//!
//! ## Character Set Policy
//! - **Unicode adopted**: braille spinner frames render in every modern terminal
//! - Button brackets stay ASCII so they line up in any font

/// Spinner animation frames
pub mod spinner {
    /// Braille dots, one full turn
    pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

/// Button decorations
pub mod button {
    /// Left bracket of a bordered button
    pub const OPEN: &str = "[ ";
    /// Right bracket of a bordered button
    pub const CLOSE: &str = " ]";
    /// Space between icon and title
    pub const ICON_GAP: &str = " ";
}

/// Default art for the demo
pub mod art {
    /// Empty inbox tray
    pub const EMPTY_TRAY: &str = r"
 .-----------.
 |           |
 |   (-_-)   |
 |           |
 |___     ___|
     \___/";
}
