// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::Action;
use std::collections::VecDeque;

/// Two stack undo / redo log.
///
/// - [`EditHistory::record`] pushes a new action and clears the redo stack, so history
///   is linear (no branches).
/// - The undo stack is capped at `capacity`. When a push overflows it, the oldest
///   action is silently dropped from the bottom; that edit can no longer be undone.
/// - Undo moves the top action to the redo stack, redo moves it back. Neither clears
///   anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHistory {
    undo: VecDeque<Action>,
    redo: Vec<Action>,
    capacity: usize,
}

impl EditHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.min(64)),
            redo: Vec::new(),
            capacity,
        }
    }

    pub fn record(&mut self, action: Action) {
        self.redo.clear();
        self.push_undo(action);
    }

    pub fn pop_undo(&mut self) -> Option<Action> { self.undo.pop_back() }

    pub fn pop_redo(&mut self) -> Option<Action> { self.redo.pop() }

    pub fn push_redo(&mut self, action: Action) { self.redo.push(action); }

    /// Push without touching the redo stack (used when redoing).
    pub fn push_undo(&mut self, action: Action) {
        self.undo.push_back(action);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    #[must_use]
    pub fn undo_len(&self) -> usize { self.undo.len() }

    #[must_use]
    pub fn redo_len(&self) -> usize { self.redo.len() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self { Self::new(super::DEFAULT_UNDO_CAPACITY) }
}
