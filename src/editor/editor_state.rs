use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::mirror::SelectionSource;

/// Editor pane state
///
/// Wraps the textarea widget and translates its (row, col) selection into
/// the absolute char-offset ranges the mirror consumes.
pub struct EditorState {
    pub textarea: TextArea<'static>,
    /// Last (start, end) pair published to the mirror, for change detection
    last_selection: (usize, usize),
}

impl EditorState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        configure(&mut textarea);

        Self {
            textarea,
            last_selection: (0, 0),
        }
    }

    /// Create an editor pre-filled with the given text, cursor at the top
    pub fn with_text(text: &str) -> Self {
        let mut textarea = TextArea::from(text.lines());
        configure(&mut textarea);

        Self {
            textarea,
            last_selection: (0, 0),
        }
    }

    /// Current selection as absolute char offsets, collapsed to the cursor
    /// position when no selection is active
    pub fn selection_offsets(&self) -> (usize, usize) {
        match self.textarea.selection_range() {
            Some((start, end)) => {
                let a = self.offset_of(start);
                let b = self.offset_of(end);
                (a.min(b), a.max(b))
            }
            None => {
                let cursor = self.offset_of(self.textarea.cursor());
                (cursor, cursor)
            }
        }
    }

    /// The selection (or cursor) position if it moved since the last call.
    ///
    /// This is the SC_UPDATE_SELECTION-style filter: the app forwards every
    /// returned pair to the mirror and skips redundant notifications.
    pub fn take_selection_update(&mut self) -> Option<(usize, usize)> {
        let current = self.selection_offsets();
        if current == self.last_selection {
            return None;
        }
        self.last_selection = current;
        Some(current)
    }

    /// Absolute char offset of a (row, col) position; newlines count as one
    fn offset_of(&self, pos: (usize, usize)) -> usize {
        let (row, col) = pos;
        let chars_before: usize = self
            .textarea
            .lines()
            .iter()
            .take(row)
            .map(|line| line.chars().count() + 1)
            .sum();
        chars_before + col
    }
}

impl SelectionSource for EditorState {
    fn contents_range(&self, start: usize, end: usize) -> String {
        if end <= start {
            return String::new();
        }
        let joined = self.textarea.lines().join("\n");
        joined.chars().skip(start).take(end - start).collect()
    }
}

fn configure(textarea: &mut TextArea<'static>) {
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Editor ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());

    textarea.set_selection_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));
}

#[cfg(test)]
#[path = "editor_state_tests.rs"]
mod editor_state_tests;
