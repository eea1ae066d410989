use crate::clipboard::PrimaryClipboard;
use crate::config::Config;
use crate::editor::EditorState;
use crate::mirror::SelectionMirror;
use crate::notification::NotificationState;

/// Application state
pub struct App {
    pub editor: EditorState,
    pub mirror: SelectionMirror<PrimaryClipboard>,
    pub notification: NotificationState,
    should_quit: bool,
    dirty: bool,
}

impl App {
    /// Create a new App, optionally pre-filled with file contents
    pub fn new(initial_text: Option<String>, config: &Config) -> Self {
        let editor = match initial_text {
            Some(ref text) => EditorState::with_text(text),
            None => EditorState::new(),
        };
        let backend = PrimaryClipboard::new(config.clipboard.backend);

        Self {
            editor,
            mirror: SelectionMirror::new(backend),
            notification: NotificationState::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the next loop iteration needs a redraw.
    ///
    /// An active notification forces periodic redraws so it can expire.
    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Forward the current selection to the mirror if it moved.
    ///
    /// Called after every handled input event; the editor deduplicates, so
    /// the mirror only sees real selection updates.
    pub fn publish_selection(&mut self) {
        if let Some((start, end)) = self.editor.take_selection_update() {
            self.mirror.on_selection_changed(start, end, &self.editor);
            self.dirty = true;
        }
    }
}
