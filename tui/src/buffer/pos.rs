// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter};

/// Cursor position in code point units, 0 based.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    #[must_use]
    pub fn new(col: usize, row: usize) -> Self { Self { col, row } }
}

/// `(col, row)` reads the same as the `SetCursor(x, y)` argument order.
impl From<(usize, usize)> for Pos {
    fn from((col, row): (usize, usize)) -> Self { Self { col, row } }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[c:{}, r:{}]", self.col, self.row)
    }
}

/// 1 based, as shown in the status bar.
impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.row + 1, self.col + 1)
    }
}
