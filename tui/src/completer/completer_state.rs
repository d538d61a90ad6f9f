// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEFAULT_MAX_VISIBLE_COMPLETIONS, KEYWORDS, NoPatterns, PatternSource};
use crate::{DEBUG_QUILL_SHOW_COMMANDS, PopupView, Pos, TextBuffer};
use std::{fmt::{Debug, Formatter},
          sync::Arc};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CompletionState {
    #[default]
    Inactive,
    Active {
        candidates: Vec<String>,
        selected: usize,
        /// Start of the typed prefix; the row is the cursor row at trigger time.
        prefix_start: Pos,
    },
}

/// Characters that can be part of a completed word.
#[must_use]
pub fn is_word_char(ch: char) -> bool { ch.is_alphanumeric() || ch == '_' }

/// Prefix popup state machine.
///
/// ```text
///             trigger (results)
///  Inactive ───────────────────▶ Active ──┐ next / prev (wrap)
///     ▲                            │ ◀────┘
///     └──── accept / cancel ───────┘
/// ```
pub struct Completer {
    state: CompletionState,
    source: Arc<dyn PatternSource>,
    max_visible: usize,
}

impl Debug for Completer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completer")
            .field("state", &self.state)
            .field("max_visible", &self.max_visible)
            .finish_non_exhaustive()
    }
}

impl Default for Completer {
    fn default() -> Self { Self::new(Arc::new(NoPatterns), DEFAULT_MAX_VISIBLE_COMPLETIONS) }
}

impl Completer {
    #[must_use]
    pub fn new(source: Arc<dyn PatternSource>, max_visible: usize) -> Self {
        Self {
            state: CompletionState::Inactive,
            source,
            max_visible: max_visible.max(1),
        }
    }

    #[must_use]
    pub fn state(&self) -> &CompletionState { &self.state }

    #[must_use]
    pub fn is_active(&self) -> bool { matches!(self.state, CompletionState::Active { .. }) }

    /// Candidates that are shown, and the window Next / Prev cycle within.
    #[must_use]
    pub fn visible_candidates(&self) -> &[String] {
        match &self.state {
            CompletionState::Active { candidates, .. } => {
                &candidates[..candidates.len().min(self.max_visible)]
            }
            CompletionState::Inactive => &[],
        }
    }

    /// Find the word before the cursor and look up candidates for it. Becomes active
    /// only when there is at least one candidate. Returns whether it is now active.
    pub fn trigger(&mut self, buffer: &TextBuffer) -> bool {
        let cursor = buffer.cursor();
        let line = buffer.line_chars(cursor.row);
        let end = cursor.col.min(line.len());
        let start = line[..end]
            .iter()
            .rposition(|it| !is_word_char(*it))
            .map_or(0, |it| it + 1);
        let prefix: String = line[start..end].iter().collect();

        let mut candidates: Vec<String> = vec![];
        let keywords = KEYWORDS
            .iter()
            .filter(|it| it.starts_with(&prefix))
            .map(|it| (*it).to_string());
        for candidate in self.source.autocomplete(&prefix).into_iter().chain(keywords) {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        DEBUG_QUILL_SHOW_COMMANDS.then(|| {
            tracing::debug!(
                message = "completion triggered",
                prefix = %prefix,
                candidates = candidates.len()
            );
        });

        self.state = if candidates.is_empty() {
            CompletionState::Inactive
        } else {
            CompletionState::Active {
                candidates,
                selected: 0,
                prefix_start: Pos::new(start, cursor.row),
            }
        };
        self.is_active()
    }

    pub fn next(&mut self) { self.step(1); }

    pub fn prev(&mut self) { self.step(-1); }

    fn step(&mut self, delta: isize) {
        let window = self.visible_candidates().len();
        if let CompletionState::Active { selected, .. } = &mut self.state {
            if window == 0 {
                return;
            }
            *selected = if delta >= 0 {
                (*selected + 1) % window
            } else {
                (*selected + window - 1) % window
            };
        }
    }

    /// Replace the typed prefix with the selected candidate. The prefix is removed with
    /// one Backspace per character and the candidate is typed one character at a time,
    /// so each step can be undone on its own. Returns whether the buffer changed.
    pub fn accept(&mut self, buffer: &mut TextBuffer) -> bool {
        let CompletionState::Active {
            candidates,
            selected,
            prefix_start,
        } = std::mem::take(&mut self.state)
        else {
            return false;
        };
        let Some(choice) = candidates.get(selected) else {
            return false;
        };

        let cursor = buffer.cursor();
        let mut changed = false;
        if cursor.row == prefix_start.row {
            for _ in prefix_start.col..cursor.col {
                changed |= buffer.backspace();
            }
        }
        for ch in choice.chars() {
            changed |= buffer.insert_char(ch);
        }

        DEBUG_QUILL_SHOW_COMMANDS.then(|| {
            tracing::debug!(message = "completion accepted", choice = %choice);
        });
        changed
    }

    pub fn cancel(&mut self) { self.state = CompletionState::Inactive; }

    /// Popup contents for the renderer, when active.
    #[must_use]
    pub fn view(&self) -> Option<PopupView<'_>> {
        match &self.state {
            CompletionState::Active {
                selected,
                prefix_start,
                ..
            } => Some(PopupView {
                items: self.visible_candidates(),
                selected: *selected,
                anchor: *prefix_start,
            }),
            CompletionState::Inactive => None,
        }
    }
}
