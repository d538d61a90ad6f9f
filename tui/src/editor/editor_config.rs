// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_MAX_VISIBLE_COMPLETIONS, DEFAULT_STATUS_ERROR_CAP, DEFAULT_UNDO_CAPACITY,
            DEFAULT_VALIDATION_DEBOUNCE, LayoutConfig, RenderConfig};
use std::time::Duration;

/// How long the decoder waits for the rest of an escape sequence, or for the LF after a
/// CR, before resolving what it has.
pub const DEFAULT_ESCAPE_LOOKAHEAD: Duration = Duration::from_millis(50);

/// Each message in the byte queue is one `read()` worth of bytes.
pub const DEFAULT_BYTE_QUEUE_CAPACITY: usize = 64;

pub const DEFAULT_KEY_CHANNEL_CAPACITY: usize = 256;

/// All the tunables of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub undo_capacity: usize,
    pub validation_debounce: Duration,
    pub escape_lookahead: Duration,
    pub byte_queue_capacity: usize,
    pub key_channel_capacity: usize,
    pub max_visible_completions: usize,
    pub annotation_width: usize,
    pub min_code_width: usize,
    /// Visible characters of a validation error shown in the status bar.
    pub status_error_cap: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            validation_debounce: DEFAULT_VALIDATION_DEBOUNCE,
            escape_lookahead: DEFAULT_ESCAPE_LOOKAHEAD,
            byte_queue_capacity: DEFAULT_BYTE_QUEUE_CAPACITY,
            key_channel_capacity: DEFAULT_KEY_CHANNEL_CAPACITY,
            max_visible_completions: DEFAULT_MAX_VISIBLE_COMPLETIONS,
            annotation_width: layout.annotation_width,
            min_code_width: layout.min_code_width,
            status_error_cap: DEFAULT_STATUS_ERROR_CAP,
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            layout: LayoutConfig {
                annotation_width: self.annotation_width,
                min_code_width: self.min_code_width,
            },
            status_error_cap: self.status_error_cap,
        }
    }
}
