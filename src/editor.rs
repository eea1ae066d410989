//! Host editor pane
//!
//! Wraps the tui-textarea widget, tracks the visual selection, and exposes
//! it to the mirror as absolute char-offset ranges.

pub mod editor_events;
mod editor_state;

pub use editor_state::EditorState;
