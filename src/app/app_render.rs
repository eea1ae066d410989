use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::mirror::OwnershipState;
use crate::notification;

impl App {
    /// Render the UI: editor pane, status line, notification overlay
    pub fn render(&mut self, frame: &mut Frame) {
        let [editor_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        frame.render_widget(&self.editor.textarea, editor_area);
        self.render_status_line(frame, status_area);

        notification::render_notification(frame, &mut self.notification);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (label, color) = match self.mirror.state() {
            OwnershipState::Idle => ("IDLE", Color::DarkGray),
            OwnershipState::Owned => ("PRIMARY", Color::Green),
            OwnershipState::Superseded => ("SUPERSEDED", Color::Yellow),
        };

        let (row, col) = self.editor.textarea.cursor();
        let line = Line::from(vec![
            Span::styled(format!(" {} ", label), Style::default().fg(color)),
            Span::raw(format!(" {}:{} ", row + 1, col + 1)),
            Span::styled(
                " Shift+arrows select · Ctrl+Q quit ",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
