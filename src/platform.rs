//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier for form shortcuts. Ctrl on every platform, since most macOS
/// terminals do not forward Cmd chords.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Esc";

/// True if `key` is the shortcut modifier plus `c`
pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(SHORTCUT_MODIFIER)
}
