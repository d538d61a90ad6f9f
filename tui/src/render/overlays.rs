// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Popups drawn on top of a frame: the completion list and the command menu.
//!
//! Each overlay is a separate draw appended after [`Renderer::render_frame`]. It leaves
//! the terminal cursor where the frame put it.

use super::{Renderer, ScreenPos, Viewport, text_rows};
use crate::{BG_POPUP, HIDE_CURSOR, Pos, SGR_RESET, SGR_REVERSE, SHOW_CURSOR, TermSize,
            cursor_to, printable, truncate_with_ellipsis};

/// What the completion popup shows.
#[derive(Debug, Clone, Copy)]
pub struct PopupView<'a> {
    pub items: &'a [String],
    pub selected: usize,
    /// Buffer position of the start of the typed prefix.
    pub anchor: Pos,
}

/// A box of rows at a fixed screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListBox {
    origin: ScreenPos,
    width: usize,
}

impl ListBox {
    fn draw_row(&self, acc: &mut String, index: usize, text: &str, highlighted: bool) {
        let text = truncate_with_ellipsis(&printable(text), self.width.saturating_sub(2));
        acc.push_str(&cursor_to(self.origin.row + index, self.origin.col));
        acc.push_str(BG_POPUP);
        if highlighted {
            acc.push_str(SGR_REVERSE);
        }
        let inner = self.width.saturating_sub(2);
        acc.push_str(&format!(" {text:<inner$} "));
        acc.push_str(SGR_RESET);
    }
}

/// Keep a box of `width` x `height` inside the text area (rows `2..=text_rows + 1`).
fn clamp_origin(origin: ScreenPos, width: usize, height: usize, size: TermSize) -> ScreenPos {
    let cols = usize::from(size.cols);
    let last_row = text_rows(size) + 1;
    let col = origin.col.min(cols.saturating_sub(width) + 1).max(1);
    let row = origin.row.min((last_row + 1).saturating_sub(height)).max(2);
    ScreenPos { row, col }
}

impl Renderer {
    /// Completion list, below the cursor row if it fits there, otherwise above it.
    /// Starts at the column of the prefix being completed.
    #[must_use]
    pub fn draw_completion_popup(
        &self,
        popup: &PopupView<'_>,
        viewport: Viewport,
        size: TermSize,
    ) -> String {
        if popup.items.is_empty() {
            return String::new();
        }
        let cols = usize::from(size.cols);
        let gutter_width = self.tracker_gutter_width();
        let cursor = self.cursor_screen_pos();
        let height = popup.items.len();
        let width = (popup.items.iter().map(|it| it.chars().count()).max().unwrap_or(0) + 2)
            .min(cols.saturating_sub(gutter_width).max(3));

        let last_text_row = text_rows(size) + 1;
        let below = cursor.row + 1;
        let row = if below + height - 1 <= last_text_row {
            below
        } else {
            cursor.row.saturating_sub(height)
        };
        let col = gutter_width + 1 + popup.anchor.col.saturating_sub(viewport.left);
        let origin = clamp_origin(ScreenPos { row, col }, width, height, size);

        let list_box = ListBox { origin, width };
        let mut acc = String::from(HIDE_CURSOR);
        for (index, item) in popup.items.iter().enumerate() {
            list_box.draw_row(&mut acc, index, item, index == popup.selected);
        }
        self.restore_cursor(&mut acc);
        acc
    }

    /// Command menu, centered in the text area with `title` in its first row. When the
    /// text area is too short for every item, only the items around `selected` are
    /// drawn.
    #[must_use]
    pub fn draw_menu(&self, title: &str, items: &[String], selected: usize, size: TermSize) -> String {
        let cols = usize::from(size.cols);
        let text_area = text_rows(size);
        let shown = items.len().min(text_area.saturating_sub(1));
        let first = (selected + 1).saturating_sub(shown).min(items.len() - shown);
        let height = shown + 1;
        let content_width = items
            .iter()
            .map(|it| it.chars().count() + 2)
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        let width = (content_width + 2).min(cols.max(1));

        let row = 2 + (text_area - height) / 2;
        let col = 1 + cols.saturating_sub(width) / 2;
        let origin = clamp_origin(ScreenPos { row, col }, width, height, size);

        let list_box = ListBox { origin, width };
        let mut acc = String::from(HIDE_CURSOR);
        list_box.draw_row(&mut acc, 0, title, true);
        for (offset, item) in items.iter().enumerate().skip(first).take(shown) {
            let is_selected = offset == selected;
            let marker = if is_selected { "▸ " } else { "  " };
            list_box.draw_row(&mut acc, offset - first + 1, &format!("{marker}{item}"), is_selected);
        }
        self.restore_cursor(&mut acc);
        acc
    }

    fn tracker_gutter_width(&self) -> usize {
        self.layout().map_or(0, |it| it.gutter_width)
    }

    fn restore_cursor(&self, acc: &mut String) {
        let cursor = self.cursor_screen_pos();
        acc.push_str(&cursor_to(cursor.row, cursor.col));
        acc.push_str(SHOW_CURSOR);
    }
}
