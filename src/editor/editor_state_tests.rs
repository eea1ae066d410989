use super::*;
use tui_textarea::CursorMove;

fn select(state: &mut EditorState, from: (u16, u16), to: (u16, u16)) {
    state.textarea.move_cursor(CursorMove::Jump(from.0, from.1));
    state.textarea.start_selection();
    state.textarea.move_cursor(CursorMove::Jump(to.0, to.1));
}

#[test]
fn test_no_selection_collapses_to_cursor() {
    let mut state = EditorState::with_text("hello\nworld");
    state.textarea.move_cursor(CursorMove::Jump(1, 2));

    assert_eq!(state.selection_offsets(), (8, 8));
}

#[test]
fn test_single_line_selection_offsets() {
    let mut state = EditorState::with_text("hello world");
    select(&mut state, (0, 0), (0, 5));

    assert_eq!(state.selection_offsets(), (0, 5));
}

#[test]
fn test_multiline_selection_counts_newlines() {
    let mut state = EditorState::with_text("hello\nworld");
    select(&mut state, (0, 3), (1, 2));

    // "hello" is 5 chars, the newline is 1, so (1, 2) is offset 8
    assert_eq!(state.selection_offsets(), (3, 8));
}

#[test]
fn test_backwards_selection_is_ordered() {
    let mut state = EditorState::with_text("hello world");
    select(&mut state, (0, 8), (0, 2));

    assert_eq!(state.selection_offsets(), (2, 8));
}

#[test]
fn test_contents_range_single_line() {
    let state = EditorState::with_text("hello world");
    assert_eq!(state.contents_range(6, 11), "world");
}

#[test]
fn test_contents_range_spans_newline() {
    let state = EditorState::with_text("hello\nworld");
    assert_eq!(state.contents_range(3, 8), "lo\nwo");
}

#[test]
fn test_contents_range_char_offsets_not_bytes() {
    let state = EditorState::with_text("日本語 text");
    assert_eq!(state.contents_range(0, 3), "日本語");
}

#[test]
fn test_contents_range_inverted_is_empty() {
    let state = EditorState::with_text("hello");
    assert_eq!(state.contents_range(4, 2), "");
}

#[test]
fn test_contents_range_past_end_is_truncated() {
    let state = EditorState::with_text("hi");
    assert_eq!(state.contents_range(0, 100), "hi");
}

#[test]
fn test_take_selection_update_deduplicates() {
    let mut state = EditorState::with_text("hello world");
    select(&mut state, (0, 0), (0, 5));

    assert_eq!(state.take_selection_update(), Some((0, 5)));
    // Same selection again: no notification
    assert_eq!(state.take_selection_update(), None);

    state.textarea.cancel_selection();
    state.textarea.move_cursor(CursorMove::Jump(0, 7));
    assert_eq!(state.take_selection_update(), Some((7, 7)));
}

#[test]
fn test_take_selection_update_reports_cursor_moves() {
    // Caret moves with no selection still notify, like SC_UPDATE_SELECTION;
    // the cleared-selection reclaim depends on them
    let mut state = EditorState::with_text("hello world");

    state.textarea.move_cursor(CursorMove::Jump(0, 3));
    assert_eq!(state.take_selection_update(), Some((3, 3)));
}

#[test]
fn test_fresh_editor_has_no_pending_update() {
    let mut state = EditorState::new();
    assert_eq!(state.take_selection_update(), None);
}
