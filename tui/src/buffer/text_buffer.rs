// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The document: lines of code points, a cursor, and the undo / redo log.
//!
//! Every operation here is total. Boundary conditions (Backspace at the very start,
//! Delete at the very end, a kill with nothing to kill, undo with an empty log) are
//! no-ops that record nothing. Mutating operations return `true` when the document
//! changed, so the caller knows whether to re-validate.
//!
//! Every mutation is expressed as an [`Action`] that is applied to the lines and then
//! recorded, so an edit and its redo share one code path.

use super::{Action, ActionKind, DEFAULT_UNDO_CAPACITY, EditHistory, Pos, TAB_WIDTH};

/// One line of text, without its trailing newline.
pub type Line = Vec<char>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    pub(crate) lines: Vec<Line>,
    pub(crate) cursor: Pos,
    history: EditHistory,
}

impl Default for TextBuffer {
    fn default() -> Self { Self::new(DEFAULT_UNDO_CAPACITY) }
}

impl TextBuffer {
    /// Empty document (one empty line).
    #[must_use]
    pub fn new(undo_capacity: usize) -> Self {
        Self {
            lines: vec![Line::new()],
            cursor: Pos::default(),
            history: EditHistory::new(undo_capacity),
        }
    }

    /// Load `content`. A single trailing newline is not a line of its own, and a `\r`
    /// before a `\n` is dropped.
    #[must_use]
    pub fn from_content(content: &str, undo_capacity: usize) -> Self {
        let body = content.strip_suffix('\n').unwrap_or(content);
        let lines = body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        Self {
            lines,
            cursor: Pos::default(),
            history: EditHistory::new(undo_capacity),
        }
    }

    /// Serialize: lines joined with `\n` plus exactly one trailing `\n`.
    #[must_use]
    pub fn content(&self) -> String {
        let mut acc = String::with_capacity(self.lines.iter().map(|it| it.len() + 1).sum());
        for line in &self.lines {
            acc.extend(line.iter());
            acc.push('\n');
        }
        acc
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Line `row` as a `String`, or empty when out of range.
    #[must_use]
    pub fn line(&self, row: usize) -> String {
        self.line_chars(row).iter().collect()
    }

    #[must_use]
    pub fn line_chars(&self, row: usize) -> &[char] {
        self.lines.get(row).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn line_len(&self, row: usize) -> usize { self.line_chars(row).len() }

    #[must_use]
    pub fn cursor(&self) -> Pos { self.cursor }

    #[must_use]
    pub fn history(&self) -> &EditHistory { &self.history }

    #[must_use]
    pub fn can_undo(&self) -> bool { self.history.undo_len() > 0 }

    #[must_use]
    pub fn can_redo(&self) -> bool { self.history.redo_len() > 0 }

    fn perform(&mut self, kind: ActionKind, row: usize, col: usize, text: String) -> bool {
        let action = Action::new(kind, row, col, text, self.cursor);
        self.cursor = action.apply(&mut self.lines);
        self.history.record(action);
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.new_line();
        }
        let Pos { col, row } = self.cursor;
        self.perform(ActionKind::Insert, row, col, ch.to_string())
    }

    /// Insert [`TAB_WIDTH`] spaces as one action.
    pub fn insert_tab(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        self.perform(ActionKind::Insert, row, col, " ".repeat(TAB_WIDTH))
    }

    pub fn backspace(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        if col > 0 {
            let deleted = self.lines[row][col - 1].to_string();
            self.perform(ActionKind::Delete, row, col - 1, deleted)
        } else if row > 0 {
            let join_col = self.line_len(row - 1);
            self.perform(ActionKind::JoinLine, row - 1, join_col, String::new())
        } else {
            false
        }
    }

    pub fn delete_char(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        if col < self.line_len(row) {
            let deleted = self.lines[row][col].to_string();
            self.perform(ActionKind::Delete, row, col, deleted)
        } else if row + 1 < self.line_count() {
            self.perform(ActionKind::JoinLine, row, col, String::new())
        } else {
            false
        }
    }

    /// Split the line at the cursor with auto indent.
    ///
    /// The leading whitespace of the original line is copied onto the new line only
    /// when the cursor is at or past the end of that whitespace. Pressing Enter inside
    /// (or before) the indentation moves the existing indentation down unchanged instead
    /// of doubling it.
    pub fn new_line(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        let indent: String = self.lines[row]
            .iter()
            .take_while(|it| **it == ' ' || **it == '\t')
            .collect();
        let indent_len = indent.chars().count();
        let applied = if indent_len > 0 && col >= indent_len {
            indent
        } else {
            String::new()
        };
        self.perform(ActionKind::Newline, row, col, applied)
    }

    /// Delete from the cursor to the end of the line, as one undoable action.
    pub fn kill_to_end(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        if col >= self.line_len(row) {
            return false;
        }
        let killed = self.lines[row][col..].iter().collect();
        self.perform(ActionKind::Delete, row, col, killed)
    }

    /// Delete from the start of the line to the cursor, as one undoable action.
    pub fn kill_to_start(&mut self) -> bool {
        let Pos { col, row } = self.cursor;
        if col == 0 {
            return false;
        }
        let killed = self.lines[row][..col].iter().collect();
        self.perform(ActionKind::Delete, row, 0, killed)
    }

    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop_undo() else {
            return false;
        };
        self.cursor = action.revert(&mut self.lines);
        self.history.push_redo(action);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.pop_redo() else {
            return false;
        };
        self.cursor = action.apply(&mut self.lines);
        self.history.push_undo(action);
        true
    }
}

#[cfg(test)]
mod tests_editing {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer_with(content: &str, col: isize, row: isize) -> TextBuffer {
        let mut buffer = TextBuffer::from_content(content, DEFAULT_UNDO_CAPACITY);
        buffer.set_cursor(col, row);
        buffer
    }

    fn lines(buffer: &TextBuffer) -> Vec<String> {
        (0..buffer.line_count()).map(|row| buffer.line(row)).collect()
    }

    #[test]
    fn content_always_has_one_trailing_newline() {
        assert_eq!(TextBuffer::default().content(), "\n");
        assert_eq!(TextBuffer::from_content("a\nb", 10).content(), "a\nb\n");
        assert_eq!(TextBuffer::from_content("a\nb\n", 10).content(), "a\nb\n");
        assert_eq!(TextBuffer::from_content("a\r\nb\r\n", 10).content(), "a\nb\n");
        assert_eq!(TextBuffer::from_content("a\n\n", 10).content(), "a\n\n");
    }

    #[test]
    fn insert_char_advances_cursor() {
        let mut buffer = TextBuffer::default();
        for ch in "hé!".chars() {
            assert!(buffer.insert_char(ch));
        }
        assert_eq!(buffer.line(0), "hé!");
        assert_eq!(buffer.cursor(), Pos::new(3, 0));
        assert_eq!(buffer.history().undo_len(), 3);
    }

    #[test]
    fn insert_tab_is_two_spaces_one_action() {
        let mut buffer = buffer_with("ab", 1, 0);
        buffer.insert_tab();
        assert_eq!(buffer.line(0), "a  b");
        assert_eq!(buffer.cursor(), Pos::new(3, 0));
        assert_eq!(buffer.history().undo_len(), 1);
    }

    #[test]
    fn backspace_mid_line() {
        let mut buffer = buffer_with("abc", 2, 0);
        assert!(buffer.backspace());
        assert_eq!(buffer.line(0), "ac");
        assert_eq!(buffer.cursor(), Pos::new(1, 0));
    }

    #[test]
    fn backspace_at_line_start_joins_previous() {
        let mut buffer = buffer_with("abc\ndef", 0, 1);
        assert!(buffer.backspace());
        assert_eq!(lines(&buffer), vec!["abcdef"]);
        assert_eq!(buffer.cursor(), Pos::new(3, 0));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut buffer = buffer_with("abc", 0, 0);
        assert!(!buffer.backspace());
        assert_eq!(buffer.history().undo_len(), 0);
    }

    #[test]
    fn delete_char_mid_line_keeps_cursor() {
        let mut buffer = buffer_with("abc", 1, 0);
        assert!(buffer.delete_char());
        assert_eq!(buffer.line(0), "ac");
        assert_eq!(buffer.cursor(), Pos::new(1, 0));
    }

    #[test]
    fn delete_char_at_line_end_joins_next() {
        let mut buffer = buffer_with("abc\ndef", 3, 0);
        assert!(buffer.delete_char());
        assert_eq!(lines(&buffer), vec!["abcdef"]);
        assert_eq!(buffer.cursor(), Pos::new(3, 0));
    }

    #[test]
    fn delete_char_at_document_end_is_noop() {
        let mut buffer = buffer_with("abc", 3, 0);
        assert!(!buffer.delete_char());
        assert_eq!(buffer.history().undo_len(), 0);
    }

    #[test]
    fn new_line_after_indent_copies_indent() {
        let mut buffer = buffer_with("  hello world", 13, 0);
        buffer.new_line();
        assert_eq!(lines(&buffer), vec!["  hello world", "  "]);
        assert_eq!(buffer.cursor(), Pos::new(2, 1));
    }

    #[test]
    fn new_line_at_column_zero_adds_no_indent() {
        let mut buffer = buffer_with("  hello world", 0, 0);
        buffer.new_line();
        assert_eq!(lines(&buffer), vec!["", "  hello world"]);
        assert_eq!(buffer.cursor(), Pos::new(0, 1));
    }

    #[test]
    fn new_line_mid_line_indents_tail() {
        let mut buffer = buffer_with("  hello world", 7, 0);
        buffer.new_line();
        assert_eq!(lines(&buffer), vec!["  hello", "   world"]);
        assert_eq!(buffer.cursor(), Pos::new(2, 1));
    }

    #[test]
    fn new_line_inside_indent_adds_no_indent() {
        let mut buffer = buffer_with("    x", 2, 0);
        buffer.new_line();
        assert_eq!(lines(&buffer), vec!["  ", "  x"]);
        assert_eq!(buffer.cursor(), Pos::new(0, 1));
    }

    #[test]
    fn insert_newline_char_goes_through_new_line() {
        let mut buffer = buffer_with("ab", 1, 0);
        buffer.insert_char('\n');
        assert_eq!(lines(&buffer), vec!["a", "b"]);
    }

    #[test]
    fn kills_are_single_actions() {
        let mut buffer = buffer_with("hello world", 5, 0);
        assert!(buffer.kill_to_end());
        assert_eq!(buffer.line(0), "hello");
        assert_eq!(buffer.history().undo_len(), 1);

        assert!(buffer.kill_to_start());
        assert_eq!(buffer.line(0), "");
        assert_eq!(buffer.cursor(), Pos::new(0, 0));
        assert_eq!(buffer.history().undo_len(), 2);

        buffer.undo();
        assert_eq!(buffer.line(0), "hello");
        assert_eq!(buffer.cursor(), Pos::new(5, 0));
    }

    #[test]
    fn kills_at_boundaries_record_nothing() {
        let mut buffer = buffer_with("abc", 3, 0);
        assert!(!buffer.kill_to_end());
        buffer.set_cursor(0, 0);
        assert!(!buffer.kill_to_start());
        assert_eq!(buffer.history().undo_len(), 0);
        assert_eq!(buffer.line(0), "abc");
    }
}
