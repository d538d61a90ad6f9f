// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_QUILL_SHOW_RENDER, TermSize};

/// Line numbers always get at least this many digits.
pub const MIN_DIGIT_WIDTH: usize = 4;

/// Space plus separator after the line number.
pub const GUTTER_SEPARATOR_WIDTH: usize = 2;

/// Title bar and status bar.
pub const CHROME_ROWS: usize = 2;

/// Column widths of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderLayout {
    pub digit_width: usize,
    pub gutter_width: usize,
    /// `0` when annotations are disabled.
    pub annotation_width: usize,
    pub code_width: usize,
}

/// Tunables that feed [`RenderLayout::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub annotation_width: usize,
    pub min_code_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            annotation_width: 10,
            min_code_width: 20,
        }
    }
}

/// Decimal digits of `n` (at least 1).
#[must_use]
pub fn digits_needed(n: usize) -> usize {
    let mut digits = 1;
    let mut rest = n / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

impl RenderLayout {
    #[must_use]
    pub fn compute(line_count: usize, cols: usize, config: LayoutConfig) -> Self {
        let digit_width = digits_needed(line_count).max(MIN_DIGIT_WIDTH);
        Self::with_digit_width(digit_width, cols, config)
    }

    fn with_digit_width(digit_width: usize, cols: usize, config: LayoutConfig) -> Self {
        let gutter_width = digit_width + GUTTER_SEPARATOR_WIDTH;
        let rest = cols.saturating_sub(gutter_width);
        let (annotation_width, code_width) =
            if rest.saturating_sub(config.annotation_width) < config.min_code_width {
                (0, rest)
            } else {
                (config.annotation_width, rest - config.annotation_width)
            };
        Self {
            digit_width,
            gutter_width,
            annotation_width,
            code_width,
        }
    }
}

/// Number of rows available for text in a terminal of `size`.
#[must_use]
pub fn text_rows(size: TermSize) -> usize {
    usize::from(size.rows).saturating_sub(CHROME_ROWS).max(1)
}

/// Caches the layout between frames.
///
/// The layout is re-checked before every frame but only recomputed when the terminal
/// size changes or the line count needs more digits than the gutter has. It does not
/// shrink when lines are deleted, so the code column doesn't jump around while typing;
/// the next resize recomputes it from scratch.
#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    config: LayoutConfig,
    current: Option<(TermSize, RenderLayout)>,
}

impl LayoutTracker {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn refresh(&mut self, line_count: usize, size: TermSize) -> RenderLayout {
        let cols = usize::from(size.cols);
        let layout = match self.current {
            Some((old_size, layout)) if old_size == size => {
                let digits = digits_needed(line_count);
                if digits > layout.digit_width {
                    RenderLayout::with_digit_width(digits, cols, self.config)
                } else {
                    return layout;
                }
            }
            _ => RenderLayout::compute(line_count, cols, self.config),
        };
        DEBUG_QUILL_SHOW_RENDER.then(|| {
            tracing::debug!(message = "layout recomputed", size = %size, layout = ?layout);
        });
        self.current = Some((size, layout));
        layout
    }

    #[must_use]
    pub fn current(&self) -> Option<RenderLayout> { self.current.map(|(_, it)| it) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 1)]
    #[test_case(9, 1)]
    #[test_case(10, 2)]
    #[test_case(100, 3)]
    #[test_case(10_001, 5)]
    fn digits(n: usize, expected: usize) {
        assert_eq!(digits_needed(n), expected);
    }

    #[test_case(100, 4, 6)]
    #[test_case(10_001, 5, 7)]
    #[test_case(1, 4, 6)]
    #[test_case(1_000_000, 7, 9)]
    fn gutter(line_count: usize, digit_width: usize, gutter_width: usize) {
        let layout = RenderLayout::compute(line_count, 80, LayoutConfig::default());
        assert_eq!(layout.digit_width, digit_width);
        assert_eq!(layout.gutter_width, gutter_width);
    }

    #[test]
    fn annotation_column_when_wide_enough() {
        let layout = RenderLayout::compute(10, 80, LayoutConfig::default());
        assert_eq!(layout, RenderLayout {
            digit_width: 4,
            gutter_width: 6,
            annotation_width: 10,
            code_width: 64,
        });
    }

    #[test]
    fn annotation_dropped_when_code_would_be_too_narrow() {
        // 6 + 19 + 10: code would be 19 < 20.
        let layout = RenderLayout::compute(10, 35, LayoutConfig::default());
        assert_eq!(layout.annotation_width, 0);
        assert_eq!(layout.code_width, 29);

        // 6 + 20 + 10: exactly enough.
        let layout = RenderLayout::compute(10, 36, LayoutConfig::default());
        assert_eq!(layout.annotation_width, 10);
        assert_eq!(layout.code_width, 20);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let layout = RenderLayout::compute(10, 3, LayoutConfig::default());
        assert_eq!(layout.code_width, 0);
        assert_eq!(layout.annotation_width, 0);
    }

    #[test]
    fn tracker_grows_gutter_on_threshold_and_resets_on_resize() {
        let size = TermSize { cols: 80, rows: 24 };
        let mut tracker = LayoutTracker::new(LayoutConfig::default());
        assert_eq!(tracker.refresh(9_999, size).digit_width, 4);
        assert_eq!(tracker.refresh(10_000, size).digit_width, 5);
        // Shrinking the document keeps the wider gutter.
        assert_eq!(tracker.refresh(10, size).digit_width, 5);
        // A resize recomputes from scratch.
        let resized = TermSize { cols: 100, rows: 30 };
        let layout = tracker.refresh(10, resized);
        assert_eq!(layout.digit_width, 4);
        assert_eq!(layout.code_width, 100 - 6 - 10);
    }

    #[test]
    fn text_rows_leaves_room_for_bars() {
        assert_eq!(text_rows(TermSize { cols: 80, rows: 24 }), 22);
        assert_eq!(text_rows(TermSize { cols: 80, rows: 1 }), 1);
    }
}
