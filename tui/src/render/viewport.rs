// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Pos;

/// The visible scroll window into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top: usize,
    pub left: usize,
}

impl Viewport {
    /// Scroll the minimum amount, independently in each axis, so that `cursor` is
    /// inside a window of `rows` by `cols`.
    pub fn follow(&mut self, cursor: Pos, rows: usize, cols: usize) {
        self.top = scroll_axis(self.top, cursor.row, rows);
        self.left = scroll_axis(self.left, cursor.col, cols);
    }
}

fn scroll_axis(start: usize, target: usize, extent: usize) -> usize {
    if extent == 0 {
        return target;
    }
    if target < start {
        target
    } else if target >= start + extent {
        target + 1 - extent
    } else {
        start
    }
}
