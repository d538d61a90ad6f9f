// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// A fully decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A printable code point.
    Char(char),
    /// A named (non printable) key.
    Key(NamedKey),
    /// `Ctrl` plus a lowercase letter, or `' '` for `Ctrl+Space`.
    Ctrl(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum NamedKey {
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
}

impl From<NamedKey> for KeyEvent {
    fn from(key: NamedKey) -> Self { KeyEvent::Key(key) }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self { KeyEvent::Char(ch) }
}

impl Display for KeyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyEvent::Char(ch) => write!(f, "{ch:?}"),
            KeyEvent::Key(key) => write!(f, "{key}"),
            KeyEvent::Ctrl(' ') => write!(f, "Ctrl+Space"),
            KeyEvent::Ctrl(ch) => write!(f, "Ctrl+{}", ch.to_ascii_uppercase()),
        }
    }
}
