// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyEvent, NamedKey};

/// What a keypress asks the editor to do, independent of the completion popup (which
/// intercepts some keys while it is showing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    InsertChar(char),
    InsertTab,
    NewLine,
    Backspace,
    DeleteChar,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Home,
    End,
    PageUp,
    PageDown,
    KillToEnd,
    KillToStart,
    Undo,
    Redo,
    TriggerComplete,
    Save,
    GoToLine,
    Redraw,
    OpenMenu,
    Quit,
}

impl EditorCommand {
    /// Keys with no binding return `None` and are ignored.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let it = match key {
            KeyEvent::Char(ch) => Self::InsertChar(ch),
            KeyEvent::Key(named) => match named {
                NamedKey::Enter => Self::NewLine,
                NamedKey::Backspace => Self::Backspace,
                NamedKey::Delete => Self::DeleteChar,
                NamedKey::Tab => Self::InsertTab,
                NamedKey::Up => Self::MoveUp,
                NamedKey::Down => Self::MoveDown,
                NamedKey::Left => Self::MoveLeft,
                NamedKey::Right => Self::MoveRight,
                NamedKey::Home => Self::Home,
                NamedKey::End => Self::End,
                NamedKey::PageUp => Self::PageUp,
                NamedKey::PageDown => Self::PageDown,
                NamedKey::Escape => Self::OpenMenu,
            },
            KeyEvent::Ctrl(ch) => match ch {
                'a' => Self::Home,
                'e' => Self::End,
                'k' => Self::KillToEnd,
                'u' => Self::KillToStart,
                'z' => Self::Undo,
                'y' => Self::Redo,
                'n' | ' ' => Self::TriggerComplete,
                's' => Self::Save,
                'g' => Self::GoToLine,
                'l' => Self::Redraw,
                'q' => Self::Quit,
                _ => return None,
            },
        };
        Some(it)
    }
}
