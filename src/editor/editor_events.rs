//! Editor pane key handling
//!
//! The textarea's default keymap already extends the selection on
//! Shift+movement and clears it on plain movement, which is exactly the
//! selection lifecycle the mirror wants to observe. This module only adds
//! the few bindings the widget does not cover.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

/// Handle a key event in the editor pane.
///
/// Returns true if the buffer contents changed.
pub fn handle_editor_key(textarea: &mut TextArea<'static>, key: KeyEvent) -> bool {
    match key.code {
        // Drop the selection without moving the cursor
        KeyCode::Esc => {
            textarea.cancel_selection();
            false
        }
        // Select the whole buffer
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            textarea.select_all();
            false
        }
        _ => textarea.input(key),
    }
}
