// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Editor, EditorCommand};
use crate::{Continuation, DEBUG_QUILL_SHOW_COMMANDS, DirtyState, KeyEvent, NamedKey,
            SCRATCH_NAME};
use std::io::Write;

pub const QUIT_WARNING: &str = "Unsaved changes, press Ctrl-Q again to quit";
pub const NO_COMPLETIONS: &str = "No completions";

impl<W: Write> Editor<W> {
    /// Keys that the completion popup consumes while it is showing. Any other key closes
    /// the popup and is then handled normally. Returns whether `key` was consumed.
    pub(crate) fn handle_completion_key(&mut self, key: KeyEvent) -> bool {
        if !self.completer.is_active() {
            return false;
        }
        match key {
            KeyEvent::Key(NamedKey::Up) => self.completer.prev(),
            KeyEvent::Key(NamedKey::Down) => self.completer.next(),
            KeyEvent::Key(NamedKey::Enter | NamedKey::Tab) => {
                if self.completer.accept(&mut self.buffer) {
                    self.mark_edited();
                }
            }
            KeyEvent::Key(NamedKey::Escape) => self.completer.cancel(),
            _ => {
                self.completer.cancel();
                return false;
            }
        }
        true
    }

    /// Run one non modal command. Returns [`Continuation::Stop`] when the editor should
    /// exit.
    pub fn apply_command(&mut self, command: EditorCommand) -> Continuation {
        if command != EditorCommand::Quit {
            self.quit_armed = false;
        }

        let edited = match command {
            EditorCommand::InsertChar(ch) => self.buffer.insert_char(ch),
            EditorCommand::InsertTab => self.buffer.insert_tab(),
            EditorCommand::NewLine => self.buffer.new_line(),
            EditorCommand::Backspace => self.buffer.backspace(),
            EditorCommand::DeleteChar => self.buffer.delete_char(),
            EditorCommand::KillToEnd => self.buffer.kill_to_end(),
            EditorCommand::KillToStart => self.buffer.kill_to_start(),
            EditorCommand::Undo => self.buffer.undo(),
            EditorCommand::Redo => self.buffer.redo(),
            EditorCommand::MoveLeft => {
                self.buffer.move_left();
                false
            }
            EditorCommand::MoveRight => {
                self.buffer.move_right();
                false
            }
            EditorCommand::MoveUp => {
                self.buffer.move_up();
                false
            }
            EditorCommand::MoveDown => {
                self.buffer.move_down();
                false
            }
            EditorCommand::Home => {
                self.buffer.home();
                false
            }
            EditorCommand::End => {
                self.buffer.end();
                false
            }
            EditorCommand::PageUp => {
                self.buffer.page_up(self.page_rows());
                false
            }
            EditorCommand::PageDown => {
                self.buffer.page_down(self.page_rows());
                false
            }
            EditorCommand::TriggerComplete => {
                if !self.completer.trigger(&self.buffer) {
                    self.status.set_message(NO_COMPLETIONS);
                }
                false
            }
            EditorCommand::Save => {
                self.save();
                false
            }
            EditorCommand::Redraw => {
                self.full_redraw_pending = true;
                false
            }
            EditorCommand::Quit => return self.request_quit(),
            // Modal, run by the main loop since they read keys.
            EditorCommand::GoToLine | EditorCommand::OpenMenu => false,
        };

        if edited {
            self.mark_edited();
        }
        self.follow_cursor();
        Continuation::Continue
    }

    /// Jump to a 1 based line number, clamped to the buffer.
    pub fn go_to_line(&mut self, line: usize) {
        let row = isize::try_from(line).unwrap_or(isize::MAX).saturating_sub(1);
        self.buffer.set_cursor(0, row);
        self.follow_cursor();
    }

    /// Every mutation marks the document dirty and restarts validation.
    pub(crate) fn mark_edited(&mut self) {
        self.dirty = DirtyState::Dirty;
        self.validator.schedule(self.buffer.content());
    }

    pub fn save(&mut self) {
        let content = self.buffer.content();
        match self.persist.persist(&content) {
            Ok(()) => {
                self.dirty = DirtyState::Clean;
                let label = self.file_label.as_deref().unwrap_or(SCRATCH_NAME);
                self.status.set_message(format!("Saved {label}"));
                DEBUG_QUILL_SHOW_COMMANDS.then(|| {
                    tracing::info!(message = "saved", path = %label, bytes = content.len());
                });
            }
            Err(err) => {
                tracing::warn!(message = "save failed", error = %err);
                self.status.set_message(format!("Save failed: {err}"));
            }
        }
    }

    /// A dirty buffer needs two consecutive Ctrl-Q presses.
    fn request_quit(&mut self) -> Continuation {
        if self.dirty.is_dirty() && !self.quit_armed {
            self.quit_armed = true;
            self.status.set_message(QUIT_WARNING);
            return Continuation::Continue;
        }
        Continuation::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Collaborators, EditorConfig, NoPatterns, PersistError, TermSize,
                ValidationStatus};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn editor_with(content: &str, persist_ok: bool) -> Editor<Vec<u8>> {
        let persist: Arc<dyn crate::Persist> = if persist_ok {
            Arc::new(|_: &str| -> Result<(), PersistError> { Ok(()) })
        } else {
            Arc::new(|_: &str| -> Result<(), PersistError> {
                Err(PersistError::External("disk full".into()))
            })
        };
        let collaborators = Collaborators {
            validate: Arc::new(|_: &str| (true, String::new())),
            patterns: Arc::new(NoPatterns),
            persist,
        };
        let (editor, _redraw_rx) = Editor::new(
            content,
            Some("main.ql".into()),
            collaborators,
            &EditorConfig::default(),
            TermSize { cols: 80, rows: 24 },
            vec![],
        );
        editor
    }

    #[tokio::test]
    async fn edits_mark_dirty_and_navigation_does_not() {
        let mut editor = editor_with("abc", true);
        editor.apply_command(EditorCommand::End);
        assert_eq!(editor.dirty(), DirtyState::Clean);
        editor.apply_command(EditorCommand::InsertChar('d'));
        assert_eq!(editor.dirty(), DirtyState::Dirty);
        assert_eq!(editor.buffer().content(), "abcd\n");
    }

    #[tokio::test]
    async fn no_op_edit_stays_clean() {
        let mut editor = editor_with("abc", true);
        editor.apply_command(EditorCommand::Backspace);
        editor.apply_command(EditorCommand::Undo);
        assert_eq!(editor.dirty(), DirtyState::Clean);
    }

    #[tokio::test]
    async fn dirty_quit_needs_two_presses() {
        let mut editor = editor_with("", true);
        editor.apply_command(EditorCommand::InsertChar('x'));
        assert_eq!(
            editor.apply_command(EditorCommand::Quit),
            Continuation::Continue
        );
        assert_eq!(editor.status().message.as_deref(), Some(QUIT_WARNING));
        assert_eq!(editor.apply_command(EditorCommand::Quit), Continuation::Stop);
    }

    #[tokio::test]
    async fn another_command_disarms_quit() {
        let mut editor = editor_with("", true);
        editor.apply_command(EditorCommand::InsertChar('x'));
        editor.apply_command(EditorCommand::Quit);
        editor.apply_command(EditorCommand::MoveLeft);
        assert_eq!(
            editor.apply_command(EditorCommand::Quit),
            Continuation::Continue
        );
    }

    #[test]
    fn clean_quit_is_immediate() {
        let mut editor = editor_with("abc", true);
        assert_eq!(editor.apply_command(EditorCommand::Quit), Continuation::Stop);
    }

    #[tokio::test]
    async fn save_success_and_failure_become_status_text() {
        let mut editor = editor_with("", true);
        editor.apply_command(EditorCommand::InsertChar('x'));
        editor.apply_command(EditorCommand::Save);
        assert_eq!(editor.dirty(), DirtyState::Clean);
        assert_eq!(editor.status().message.as_deref(), Some("Saved main.ql"));

        let mut editor = editor_with("", false);
        editor.apply_command(EditorCommand::InsertChar('x'));
        editor.apply_command(EditorCommand::Save);
        assert_eq!(editor.dirty(), DirtyState::Dirty);
        assert_eq!(
            editor.status().message.as_deref(),
            Some("Save failed: disk full")
        );
        assert_eq!(editor.status().validation, ValidationStatus::NotRun);
    }

    #[test]
    fn go_to_line_clamps() {
        let mut editor = editor_with("a\nb\nc", true);
        editor.go_to_line(2);
        assert_eq!(editor.buffer().cursor().row, 1);
        editor.go_to_line(usize::MAX);
        assert_eq!(editor.buffer().cursor().row, 2);
        editor.go_to_line(0);
        assert_eq!(editor.buffer().cursor().row, 0);
    }

    #[test]
    fn trigger_without_candidates_says_so() {
        let mut editor = editor_with("zzz", true);
        editor.apply_command(EditorCommand::End);
        editor.apply_command(EditorCommand::TriggerComplete);
        assert!(!editor.completer().is_active());
        assert_eq!(editor.status().message.as_deref(), Some(NO_COMPLETIONS));
    }

    #[tokio::test]
    async fn completion_keys_are_intercepted_while_active() {
        let mut editor = editor_with("sc", true);
        editor.apply_command(EditorCommand::End);
        editor.apply_command(EditorCommand::TriggerComplete);
        assert!(editor.completer().is_active());

        assert!(editor.handle_completion_key(NamedKey::Down.into()));
        assert!(editor.handle_completion_key(NamedKey::Up.into()));
        assert!(editor.handle_completion_key(NamedKey::Enter.into()));
        assert_eq!(editor.buffer().line(0), "screen");
        assert_eq!(editor.dirty(), DirtyState::Dirty);

        editor.apply_command(EditorCommand::TriggerComplete);
        assert!(!editor.handle_completion_key(KeyEvent::Char('x')));
        assert!(!editor.completer().is_active());
    }
}
