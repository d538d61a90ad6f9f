// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyEvent, NamedKey};

pub const GO_TO_LINE_LABEL: &str = "Go to line: ";

/// Enough digits for any line count a `usize` row can address.
const MAX_LINE_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    /// 1 based line number.
    Submit(usize),
    Cancelled,
}

/// The number being typed into the modal "go to line" prompt. Shown in the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoToLinePrompt {
    digits: String,
}

impl GoToLinePrompt {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn text(&self) -> String { format!("{GO_TO_LINE_LABEL}{}", self.digits) }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key {
            KeyEvent::Char(ch) if ch.is_ascii_digit() => {
                if self.digits.len() < MAX_LINE_DIGITS {
                    self.digits.push(ch);
                }
                PromptOutcome::Pending
            }
            KeyEvent::Key(NamedKey::Backspace) => {
                self.digits.pop();
                PromptOutcome::Pending
            }
            KeyEvent::Key(NamedKey::Enter) => match self.digits.parse::<usize>() {
                Ok(line) => PromptOutcome::Submit(line),
                Err(_) => PromptOutcome::Cancelled,
            },
            KeyEvent::Key(NamedKey::Escape) => PromptOutcome::Cancelled,
            _ => PromptOutcome::Pending,
        }
    }
}
