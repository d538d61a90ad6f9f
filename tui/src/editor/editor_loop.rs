// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The main loop and the two modal flows (command menu and go to line prompt).
//!
//! Modal flows read from the same [`KeyReceiver`] as the main loop, which is suspended
//! while they run. There is only ever one reader of keys.

use super::{CommandMenu, Editor, EditorCommand, GoToLinePrompt, KeyReceiver, MENU_TITLE,
            MenuItem, MenuOutcome, PromptOutcome, ResizeReceiver};
use crate::{Continuation, DEBUG_QUILL_SHOW_COMMANDS, DEBUG_QUILL_SHOW_INPUT, KeyEvent,
            RedrawReceiver};
use std::io::Write;

/// Everything the main loop waits on.
#[derive(Debug)]
pub struct EditorChannels {
    pub keys: KeyReceiver,
    pub redraw: RedrawReceiver,
    pub resize: ResizeReceiver,
}

impl<W: Write> Editor<W> {
    /// Draw the first frame, then handle resizes, validator redraw requests and keys
    /// until the user quits or input closes. Pending validation is cancelled on the way
    /// out.
    pub async fn run(&mut self, channels: EditorChannels) {
        let EditorChannels {
            mut keys,
            mut redraw,
            mut resize,
        } = channels;
        let mut resize_open = true;
        let mut redraw_open = true;

        self.validator.schedule(self.buffer.content());
        self.render();

        loop {
            tokio::select! {
                // Cancel safe: `changed()` keeps the unseen value for the next call.
                changed = resize.changed(), if resize_open => {
                    if changed.is_ok() {
                        let size = *resize.borrow_and_update();
                        self.resize(size);
                    } else {
                        resize_open = false;
                    }
                }

                // Cancel safe since `recv()` is cancel safe.
                maybe_redraw = redraw.recv(), if redraw_open => {
                    if maybe_redraw.is_none() {
                        redraw_open = false;
                    }
                }

                maybe_key = keys.recv() => {
                    let Some(key) = maybe_key else {
                        tracing::info!(message = "input closed, leaving editor");
                        break;
                    };
                    if self.handle_key(key, &mut keys).await == Continuation::Stop {
                        break;
                    }
                }
            }
            self.render();
        }

        self.validator.stop();
        tracing::info!(message = "editor stopped", dirty = ?self.dirty);
    }

    async fn handle_key(&mut self, key: KeyEvent, keys: &mut KeyReceiver) -> Continuation {
        DEBUG_QUILL_SHOW_INPUT.then(|| {
            tracing::debug!(message = "key", key = %key);
        });
        self.status.clear_message();
        if EditorCommand::from_key(key) != Some(EditorCommand::Quit) {
            self.quit_armed = false;
        }

        if self.handle_completion_key(key) {
            self.follow_cursor();
            return Continuation::Continue;
        }
        let Some(command) = EditorCommand::from_key(key) else {
            return Continuation::Continue;
        };

        let command = match command {
            EditorCommand::OpenMenu => match self.run_menu(keys).await {
                Some(item) => EditorCommand::from(item),
                None => return Continuation::Continue,
            },
            other => other,
        };

        if command == EditorCommand::GoToLine {
            self.run_go_to_line(keys).await;
            return Continuation::Continue;
        }
        self.apply_command(command)
    }

    /// Show the command menu until an item is chosen or it is closed.
    async fn run_menu(&mut self, keys: &mut KeyReceiver) -> Option<MenuItem> {
        let mut menu = CommandMenu::new();
        let labels = menu.labels();
        loop {
            let mut frame = self.compose_frame(None);
            frame.push_str(
                &self
                    .renderer
                    .draw_menu(MENU_TITLE, &labels, menu.selected(), self.size),
            );
            self.write_frame(&frame);

            match menu.handle_key(keys.recv().await?) {
                MenuOutcome::Pending => {}
                MenuOutcome::Run(item) => {
                    DEBUG_QUILL_SHOW_COMMANDS.then(|| {
                        tracing::debug!(message = "menu item chosen", item = %item);
                    });
                    return Some(item);
                }
                MenuOutcome::Closed => return None,
            }
        }
    }

    /// Read a line number in the status bar and jump to it.
    async fn run_go_to_line(&mut self, keys: &mut KeyReceiver) {
        let mut prompt = GoToLinePrompt::new();
        loop {
            let frame = self.compose_frame(Some(&prompt.text()));
            self.write_frame(&frame);

            let Some(key) = keys.recv().await else {
                return;
            };
            match prompt.handle_key(key) {
                PromptOutcome::Pending => {}
                PromptOutcome::Submit(line) => {
                    self.go_to_line(line);
                    return;
                }
                PromptOutcome::Cancelled => return,
            }
        }
    }
}
