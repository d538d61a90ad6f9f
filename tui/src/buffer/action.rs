// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Invertible edit records.
//!
//! Each [`Action`] stores just enough to apply itself and its structural inverse, so
//! undo never needs a snapshot of the whole buffer:
//!
//! | Kind       | Apply                                             | Revert               |
//! | ---------- | ------------------------------------------------- | -------------------- |
//! | `Insert`   | insert `text` at `(col, row)`                     | remove `text`        |
//! | `Delete`   | remove `text` at `(col, row)`                     | insert `text`        |
//! | `Newline`  | split `row` at `col`, prefix new line with `text` | join, dropping `text`|
//! | `JoinLine` | append line `row + 1` to `row` (`col` = old len)  | split `row` at `col` |
//!
//! Revert always restores `cursor_before`. Apply returns the post edit cursor, which
//! is what redo uses.

use super::{Line, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ActionKind {
    Insert,
    Delete,
    Newline,
    JoinLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub row: usize,
    pub col: usize,
    /// Inserted or deleted text, or the indent applied by a newline. Never contains
    /// `'\n'`.
    pub text: String,
    pub cursor_before: Pos,
}

impl Action {
    #[must_use]
    pub fn new(
        kind: ActionKind,
        row: usize,
        col: usize,
        text: impl Into<String>,
        cursor_before: Pos,
    ) -> Self {
        Self {
            kind,
            row,
            col,
            text: text.into(),
            cursor_before,
        }
    }

    fn text_len(&self) -> usize { self.text.chars().count() }

    /// Cursor position right after this action has been applied.
    #[must_use]
    pub fn cursor_after(&self) -> Pos {
        match self.kind {
            ActionKind::Insert => Pos::new(self.col + self.text_len(), self.row),
            ActionKind::Delete | ActionKind::JoinLine => Pos::new(self.col, self.row),
            ActionKind::Newline => Pos::new(self.text_len(), self.row + 1),
        }
    }

    /// Perform the edit on `lines` and return the cursor after it.
    pub fn apply(&self, lines: &mut Vec<Line>) -> Pos {
        match self.kind {
            ActionKind::Insert => insert_text(lines, self.row, self.col, &self.text),
            ActionKind::Delete => remove_span(lines, self.row, self.col, self.text_len()),
            ActionKind::Newline => split_line(lines, self.row, self.col, &self.text),
            ActionKind::JoinLine => join_with_next(lines, self.row, 0),
        }
        self.cursor_after()
    }

    /// Undo the edit on `lines` and return the cursor from before it.
    pub fn revert(&self, lines: &mut Vec<Line>) -> Pos {
        match self.kind {
            ActionKind::Insert => remove_span(lines, self.row, self.col, self.text_len()),
            ActionKind::Delete => insert_text(lines, self.row, self.col, &self.text),
            ActionKind::Newline => join_with_next(lines, self.row, self.text_len()),
            ActionKind::JoinLine => split_line(lines, self.row, self.col, ""),
        }
        self.cursor_before
    }
}

fn insert_text(lines: &mut [Line], row: usize, col: usize, text: &str) {
    let Some(line) = lines.get_mut(row) else {
        return;
    };
    let col = col.min(line.len());
    line.splice(col..col, text.chars());
}

fn remove_span(lines: &mut [Line], row: usize, col: usize, len: usize) {
    let Some(line) = lines.get_mut(row) else {
        return;
    };
    let start = col.min(line.len());
    let end = (col + len).min(line.len());
    line.drain(start..end);
}

/// Split `row` at `col`; the tail becomes a new line `row + 1` prefixed by `indent`.
fn split_line(lines: &mut Vec<Line>, row: usize, col: usize, indent: &str) {
    let Some(line) = lines.get_mut(row) else {
        return;
    };
    let col = col.min(line.len());
    let tail = line.split_off(col);
    let mut next: Line = indent.chars().collect();
    next.extend(tail);
    lines.insert(row + 1, next);
}

/// Append line `row + 1` (minus its first `skip` code points) onto `row` and remove it.
fn join_with_next(lines: &mut Vec<Line>, row: usize, skip: usize) {
    if row + 1 >= lines.len() {
        return;
    }
    let next = lines.remove(row + 1);
    let skip = skip.min(next.len());
    lines[row].extend_from_slice(&next[skip..]);
}
