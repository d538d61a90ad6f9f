// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control flow signal for loops and tasks.
///
/// A unified type for indicating whether a loop or task should continue processing or
/// stop. Used across:
/// - The editor main loop (a key handler returns [`Continuation::Stop`] to quit).
/// - The key decoder task (stops when the byte queue closes).
/// - Modal prompts that read from the same key channel as the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Continue to the next iteration.
    #[default]
    Continue,

    /// Stop processing and exit the loop/task.
    Stop,
}

/// Whether the document has changes that have not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyState {
    #[default]
    Clean,
    Dirty,
}

impl DirtyState {
    #[must_use]
    pub fn is_dirty(self) -> bool { matches!(self, DirtyState::Dirty) }
}
