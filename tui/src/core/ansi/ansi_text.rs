// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Styled rows that are measured and clipped as plain cells, and only turned into ANSI
//! escape sequences at the very end.
//!
//! Every [`StyledChar`] occupies exactly one terminal column. Text enters a
//! [`StyledLine`] through [`display_char`], which replaces control characters, so a tab
//! or an `ESC` in document text can never move the terminal cursor or start an escape
//! sequence. Clipping and padding work on cells, so an escape sequence is never cut and
//! never counted as visible.
//!
//! [`StyledLine::render`] emits one SGR sequence per style change and ends with
//! [`SGR_RESET`] whenever a style is still open, so color never bleeds into the next
//! cell.

use crate::SGR_RESET;

/// Shown in place of a control character that is not whitespace (eg: `ESC`).
pub const CONTROL_PLACEHOLDER: char = '·';

/// The one column character drawn for `ch`. Whitespace controls (tab, newline) become
/// a space, other control characters become [`CONTROL_PLACEHOLDER`].
#[must_use]
pub fn display_char(ch: char) -> char {
    match ch {
        it if !it.is_control() => it,
        it if it.is_whitespace() => ' ',
        _ => CONTROL_PLACEHOLDER,
    }
}

/// `text` with every character passed through [`display_char`].
#[must_use]
pub fn printable(text: &str) -> String { text.chars().map(display_char).collect() }

/// One screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub display_char: char,
    /// SGR sequence the cell is drawn with, [`None`] for the terminal default.
    pub style: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    cells: Vec<StyledChar>,
}

impl StyledLine {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Width in columns.
    #[must_use]
    pub fn len(&self) -> usize { self.cells.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[must_use]
    pub fn cells(&self) -> &[StyledChar] { &self.cells }

    pub fn push_char(&mut self, ch: char, style: Option<&'static str>) {
        self.cells.push(StyledChar {
            display_char: display_char(ch),
            style,
        });
    }

    pub fn push_str(&mut self, text: &str, style: Option<&'static str>) {
        for ch in text.chars() {
            self.push_char(ch, style);
        }
    }

    pub fn push_chars(&mut self, chars: &[char], style: Option<&'static str>) {
        for ch in chars {
            self.push_char(*ch, style);
        }
    }

    pub fn append(&mut self, other: StyledLine) { self.cells.extend(other.cells); }

    /// Cells `[skip, skip + take)`, empty when `skip` is past the end.
    #[must_use]
    pub fn clip(&self, skip: usize, take: usize) -> StyledLine {
        let start = skip.min(self.cells.len());
        let end = skip.saturating_add(take).min(self.cells.len());
        StyledLine {
            cells: self.cells[start..end].to_vec(),
        }
    }

    /// Drop everything past `width` columns. Returns whether anything was dropped.
    pub fn truncate(&mut self, width: usize) -> bool {
        let cut = self.cells.len() > width;
        self.cells.truncate(width);
        cut
    }

    /// Append spaces drawn with `style` until the line is `width` columns wide.
    pub fn pad_to(&mut self, width: usize, style: Option<&'static str>) {
        while self.cells.len() < width {
            self.push_char(' ', style);
        }
    }

    /// ANSI text for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        let mut acc = String::with_capacity(self.cells.len() * 2);
        let mut current: Option<&'static str> = None;
        for cell in &self.cells {
            if cell.style != current {
                if current.is_some() {
                    acc.push_str(SGR_RESET);
                }
                if let Some(style) = cell.style {
                    acc.push_str(style);
                }
                current = cell.style;
            }
            acc.push(cell.display_char);
        }
        if current.is_some() {
            acc.push_str(SGR_RESET);
        }
        acc
    }
}

/// Cap plain text at `max` code points, replacing the tail with `…` when it is cut.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut acc: String = text.chars().take(max - 1).collect();
    acc.push('…');
    acc
}
