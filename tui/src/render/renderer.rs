// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BlockContext, LayoutConfig, LayoutTracker, RenderLayout, Viewport,
            DEFAULT_STATUS_ERROR_CAP, colorize_line, status_bar, text_rows, title_bar};
use crate::{CLEAR_SCREEN, DEBUG_QUILL_SHOW_RENDER, DirtyState, FG_ANNOTATION, FG_GUTTER,
            HIDE_CURSOR, SHOW_CURSOR, StatusText, StyledLine, TermSize, TextBuffer,
            cursor_to, truncate_with_ellipsis};

/// Drawn in the gutter for rows past the end of the document.
pub const PAST_END_MARKER: char = '~';

/// Between the line number and the code.
pub const GUTTER_SEPARATOR: char = '│';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub status_error_cap: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            status_error_cap: DEFAULT_STATUS_ERROR_CAP,
        }
    }
}

/// Everything one frame is a pure function of.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub buffer: &'a TextBuffer,
    pub viewport: Viewport,
    pub status: &'a StatusText,
    /// Shown instead of the status message while a prompt is active.
    pub prompt: Option<&'a str>,
    pub file_name: Option<&'a str>,
    pub dirty: DirtyState,
    pub size: TermSize,
}

/// 1 based screen coordinates, as used by `CSI row ; col H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPos {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    tracker: LayoutTracker,
    status_error_cap: usize,
    cursor: ScreenPos,
}

impl Renderer {
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            tracker: LayoutTracker::new(config.layout),
            status_error_cap: config.status_error_cap,
            cursor: ScreenPos::default(),
        }
    }

    /// Re-check the layout for the current line count and terminal size.
    pub fn refresh_layout(&mut self, line_count: usize, size: TermSize) -> RenderLayout {
        self.tracker.refresh(line_count, size)
    }

    /// Layout of the last frame, if one was rendered.
    #[must_use]
    pub fn layout(&self) -> Option<RenderLayout> { self.tracker.current() }

    /// Where the terminal cursor was left by the last frame.
    #[must_use]
    pub fn cursor_screen_pos(&self) -> ScreenPos { self.cursor }

    /// Build one complete frame. `full_redraw` clears the screen first (after a resize
    /// or on request); otherwise every row is simply overwritten in place.
    pub fn render_frame(&mut self, frame: &FrameInput<'_>, full_redraw: bool) -> String {
        let rows = self.compose_rows(frame);
        let layout = self.refresh_layout(frame.buffer.line_count(), frame.size);
        self.cursor = cursor_screen_pos(frame, layout);

        let mut acc = String::with_capacity(rows.iter().map(|it| it.len() + 12).sum());
        acc.push_str(HIDE_CURSOR);
        if full_redraw {
            acc.push_str(CLEAR_SCREEN);
        }
        for (index, row) in rows.iter().enumerate() {
            acc.push_str(&cursor_to(index + 1, 1));
            acc.push_str(row);
        }
        acc.push_str(&cursor_to(self.cursor.row, self.cursor.col));
        acc.push_str(SHOW_CURSOR);

        DEBUG_QUILL_SHOW_RENDER.then(|| {
            tracing::debug!(
                message = "frame rendered",
                bytes = acc.len(),
                size = %frame.size,
                cursor = ?self.cursor
            );
        });
        acc
    }

    /// Title bar, one line per text row, and the status bar, each exactly as wide as
    /// the terminal.
    pub fn compose_rows(&mut self, frame: &FrameInput<'_>) -> Vec<String> {
        let buffer = frame.buffer;
        let layout = self.refresh_layout(buffer.line_count(), frame.size);
        let cols = usize::from(frame.size.cols);
        let text_row_count = text_rows(frame.size);

        let mut acc = Vec::with_capacity(text_row_count + 2);
        acc.push(title_bar(frame.file_name, frame.dirty, cols));

        let mut context = (layout.annotation_width > 0)
            .then(|| BlockContext::establish(buffer, frame.viewport.top));

        for screen_row in 0..text_row_count {
            let row = frame.viewport.top + screen_row;
            let mut line = StyledLine::with_capacity(cols);

            if row < buffer.line_count() {
                let chars = buffer.line_chars(row);
                push_gutter_number(&mut line, row + 1, layout);
                line.append(colorize_line(chars).clip(frame.viewport.left, layout.code_width));
                line.pad_to(layout.gutter_width + layout.code_width, None);

                if let Some(context) = context.as_mut() {
                    push_annotation(&mut line, context.current(), layout);
                    context.scan_line(chars);
                }
            } else {
                line.push_char(PAST_END_MARKER, Some(FG_GUTTER));
            }

            line.truncate(cols);
            line.pad_to(cols, None);
            acc.push(line.render());
        }

        acc.push(status_bar(
            buffer.cursor(),
            frame.status,
            frame.prompt,
            cols,
            self.status_error_cap,
        ));
        acc
    }
}

/// Right aligned line number plus separator.
fn push_gutter_number(acc: &mut StyledLine, number: usize, layout: RenderLayout) {
    let gutter = format!("{number:>width$} {GUTTER_SEPARATOR}", width = layout.digit_width);
    acc.push_str(&gutter, Some(FG_GUTTER));
}

/// Right aligned block label.
fn push_annotation(acc: &mut StyledLine, label: Option<&str>, layout: RenderLayout) {
    let width = layout.annotation_width;
    let label = truncate_with_ellipsis(label.unwrap_or_default(), width.saturating_sub(1));
    acc.push_str(&format!("{label:>width$}"), Some(FG_ANNOTATION));
}

/// `(row - top + 2, gutter + 1 + (col - left))`, never left of the code column and
/// never outside the text area.
fn cursor_screen_pos(frame: &FrameInput<'_>, layout: RenderLayout) -> ScreenPos {
    let cursor = frame.buffer.cursor();
    let cols = usize::from(frame.size.cols).max(1);
    let last_text_row = text_rows(frame.size) + 1;

    let row = (cursor.row.saturating_sub(frame.viewport.top) + 2).min(last_text_row);
    let col = (layout.gutter_width + 1 + cursor.col.saturating_sub(frame.viewport.left))
        .max(layout.gutter_width + 1)
        .min(cols);
    ScreenPos { row, col }
}
