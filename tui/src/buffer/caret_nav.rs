// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement. None of these record an undo action, and all of them leave the
//! cursor inside `[0, line_len(row)] x [0, line_count - 1]`.

use super::{Pos, TextBuffer};

impl TextBuffer {
    /// Move to `(x, y)`, clamping the row first and then the column into the clamped
    /// row. Any input, including negative or huge values, is accepted.
    pub fn set_cursor(&mut self, x: isize, y: isize) {
        let max_row = self.line_count().saturating_sub(1);
        let row = usize::try_from(y).unwrap_or(0).min(max_row);
        let col = usize::try_from(x).unwrap_or(0).min(self.line_len(row));
        self.cursor = Pos::new(col, row);
    }

    fn clamp_to(&mut self, col: usize, row: usize) {
        let row = row.min(self.line_count().saturating_sub(1));
        let col = col.min(self.line_len(row));
        self.cursor = Pos::new(col, row);
    }

    /// Left, wrapping to the end of the previous line.
    pub fn move_left(&mut self) {
        let Pos { col, row } = self.cursor;
        if col > 0 {
            self.cursor.col = col - 1;
        } else if row > 0 {
            self.cursor = Pos::new(self.line_len(row - 1), row - 1);
        }
    }

    /// Right, wrapping to the start of the next line.
    pub fn move_right(&mut self) {
        let Pos { col, row } = self.cursor;
        if col < self.line_len(row) {
            self.cursor.col = col + 1;
        } else if row + 1 < self.line_count() {
            self.cursor = Pos::new(0, row + 1);
        }
    }

    pub fn move_up(&mut self) {
        let Pos { col, row } = self.cursor;
        if row > 0 {
            self.clamp_to(col, row - 1);
        }
    }

    pub fn move_down(&mut self) {
        let Pos { col, row } = self.cursor;
        if row + 1 < self.line_count() {
            self.clamp_to(col, row + 1);
        }
    }

    pub fn home(&mut self) { self.cursor.col = 0; }

    pub fn end(&mut self) { self.cursor.col = self.line_len(self.cursor.row); }

    pub fn page_up(&mut self, rows: usize) {
        let Pos { col, row } = self.cursor;
        self.clamp_to(col, row.saturating_sub(rows));
    }

    pub fn page_down(&mut self, rows: usize) {
        let Pos { col, row } = self.cursor;
        self.clamp_to(col, row.saturating_add(rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_UNDO_CAPACITY;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sample() -> TextBuffer {
        TextBuffer::from_content("first line\nab\n\nlast one here", DEFAULT_UNDO_CAPACITY)
    }

    #[test_case(0, 0, Pos::new(0, 0))]
    #[test_case(-5, -5, Pos::new(0, 0))]
    #[test_case(isize::MAX, isize::MAX, Pos::new(13, 3))]
    #[test_case(isize::MIN, 1, Pos::new(0, 1))]
    #[test_case(99, 1, Pos::new(2, 1))]
    #[test_case(5, 2, Pos::new(0, 2))]
    #[test_case(4, 99, Pos::new(4, 3))]
    fn set_cursor_clamps(x: isize, y: isize, expected: Pos) {
        let mut buffer = sample();
        buffer.set_cursor(x, y);
        assert_eq!(buffer.cursor(), expected);
    }

    #[test]
    fn set_cursor_is_always_in_bounds() {
        let values = [isize::MIN, -1000, -1, 0, 1, 2, 3, 7, 100, isize::MAX];
        let mut buffer = sample();
        for x in values {
            for y in values {
                buffer.set_cursor(x, y);
                let Pos { col, row } = buffer.cursor();
                assert!(row < buffer.line_count());
                assert!(col <= buffer.line_len(row));
            }
        }
    }

    #[test]
    fn horizontal_moves_wrap_lines() {
        let mut buffer = sample();
        buffer.set_cursor(0, 1);
        buffer.move_left();
        assert_eq!(buffer.cursor(), Pos::new(10, 0));
        buffer.move_right();
        assert_eq!(buffer.cursor(), Pos::new(0, 1));

        buffer.set_cursor(0, 0);
        buffer.move_left();
        assert_eq!(buffer.cursor(), Pos::new(0, 0));

        buffer.set_cursor(99, 3);
        buffer.move_right();
        assert_eq!(buffer.cursor(), Pos::new(13, 3));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = sample();
        buffer.set_cursor(8, 0);
        buffer.move_down();
        assert_eq!(buffer.cursor(), Pos::new(2, 1));
        buffer.move_down();
        assert_eq!(buffer.cursor(), Pos::new(0, 2));
        buffer.move_down();
        buffer.move_down();
        assert_eq!(buffer.cursor(), Pos::new(0, 3));
        buffer.move_up();
        buffer.move_up();
        buffer.move_up();
        buffer.move_up();
        assert_eq!(buffer.cursor(), Pos::new(0, 0));
    }

    #[test]
    fn home_end_and_pages() {
        let mut buffer = sample();
        buffer.set_cursor(3, 0);
        buffer.end();
        assert_eq!(buffer.cursor(), Pos::new(10, 0));
        buffer.home();
        assert_eq!(buffer.cursor(), Pos::new(0, 0));

        buffer.set_cursor(6, 0);
        buffer.page_down(2);
        assert_eq!(buffer.cursor(), Pos::new(0, 2));
        buffer.page_down(usize::MAX);
        assert_eq!(buffer.cursor(), Pos::new(0, 3));
        buffer.page_up(usize::MAX);
        assert_eq!(buffer.cursor(), Pos::new(0, 0));
    }

    #[test]
    fn moves_record_nothing() {
        let mut buffer = sample();
        buffer.move_down();
        buffer.end();
        buffer.page_down(3);
        assert!(!buffer.can_undo());
    }
}
