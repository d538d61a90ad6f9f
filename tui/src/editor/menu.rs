// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditorCommand;
use crate::{KeyEvent, NamedKey};
use strum::IntoEnumIterator;

pub const MENU_TITLE: &str = "Commands";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum MenuItem {
    Save,
    #[strum(to_string = "Go to line")]
    GoToLine,
    Undo,
    Redo,
    Quit,
}

impl From<MenuItem> for EditorCommand {
    fn from(item: MenuItem) -> Self {
        match item {
            MenuItem::Save => EditorCommand::Save,
            MenuItem::GoToLine => EditorCommand::GoToLine,
            MenuItem::Undo => EditorCommand::Undo,
            MenuItem::Redo => EditorCommand::Redo,
            MenuItem::Quit => EditorCommand::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Pending,
    Run(MenuItem),
    Closed,
}

/// Selection state of the modal command menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMenu {
    items: Vec<MenuItem>,
    selected: usize,
}

impl Default for CommandMenu {
    fn default() -> Self {
        Self {
            items: MenuItem::iter().collect(),
            selected: 0,
        }
    }
}

impl CommandMenu {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn labels(&self) -> Vec<String> { self.items.iter().map(ToString::to_string).collect() }

    #[must_use]
    pub fn selected(&self) -> usize { self.selected }

    /// Up / Down move the selection (wrapping), Enter runs it, Escape closes the menu.
    /// Other keys are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuOutcome {
        let len = self.items.len();
        match key {
            KeyEvent::Key(NamedKey::Up) => {
                self.selected = (self.selected + len - 1) % len;
                MenuOutcome::Pending
            }
            KeyEvent::Key(NamedKey::Down) => {
                self.selected = (self.selected + 1) % len;
                MenuOutcome::Pending
            }
            KeyEvent::Key(NamedKey::Enter) => MenuOutcome::Run(self.items[self.selected]),
            KeyEvent::Key(NamedKey::Escape) => MenuOutcome::Closed,
            _ => MenuOutcome::Pending,
        }
    }
}
