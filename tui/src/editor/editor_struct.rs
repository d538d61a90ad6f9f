// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EditorConfig, Persist};
use crate::{Completer, DirtyState, FrameInput, PatternSource, RedrawReceiver, Renderer,
            SharedStatus, StatusText, TermSize, TextBuffer, Validate, Validator, Viewport,
            redraw_channel, text_rows};
use std::{fmt::{Debug, Formatter},
          io::Write,
          path::{Path, PathBuf},
          sync::Arc};

/// The three external calls the editor makes.
#[derive(Clone)]
pub struct Collaborators {
    pub validate: Arc<dyn Validate>,
    pub patterns: Arc<dyn PatternSource>,
    pub persist: Arc<dyn Persist>,
}

impl Debug for Collaborators {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// A buffer being edited, plus everything needed to show it.
///
/// All fields are owned by the main loop. The only state shared with a background task
/// is [`SharedStatus`], which the validator writes to.
pub struct Editor<W: Write> {
    pub(crate) buffer: TextBuffer,
    pub(crate) viewport: Viewport,
    pub(crate) renderer: Renderer,
    pub(crate) completer: Completer,
    pub(crate) validator: Validator,
    pub(crate) status: SharedStatus,
    pub(crate) persist: Arc<dyn Persist>,
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) file_label: Option<String>,
    pub(crate) dirty: DirtyState,
    /// A dirty Ctrl-Q was pressed and warned about; the next one quits.
    pub(crate) quit_armed: bool,
    pub(crate) full_redraw_pending: bool,
    pub(crate) size: TermSize,
    pub(crate) output: W,
}

impl<W: Write> Debug for Editor<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("file_path", &self.file_path)
            .field("cursor", &self.buffer.cursor())
            .field("line_count", &self.buffer.line_count())
            .field("viewport", &self.viewport)
            .field("dirty", &self.dirty)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Editor<W> {
    /// Returns the editor and the receiving end of its redraw signal, which the main
    /// loop selects on.
    #[must_use]
    pub fn new(
        content: &str,
        file_path: Option<PathBuf>,
        collaborators: Collaborators,
        config: &EditorConfig,
        size: TermSize,
        output: W,
    ) -> (Self, RedrawReceiver) {
        let status = SharedStatus::new();
        let (redraw_signal, redraw_rx) = redraw_channel();
        let validator = Validator::new(
            collaborators.validate,
            status.clone(),
            redraw_signal,
            config.validation_debounce,
        );
        let file_label = file_path.as_ref().map(|it| it.display().to_string());

        let editor = Self {
            buffer: TextBuffer::from_content(content, config.undo_capacity),
            viewport: Viewport::default(),
            renderer: Renderer::new(config.render_config()),
            completer: Completer::new(collaborators.patterns, config.max_visible_completions),
            validator,
            status,
            persist: collaborators.persist,
            file_path,
            file_label,
            dirty: DirtyState::Clean,
            quit_armed: false,
            full_redraw_pending: true,
            size,
            output,
        };
        (editor, redraw_rx)
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer { &self.buffer }

    #[must_use]
    pub fn viewport(&self) -> Viewport { self.viewport }

    #[must_use]
    pub fn completer(&self) -> &Completer { &self.completer }

    #[must_use]
    pub fn dirty(&self) -> DirtyState { self.dirty }

    #[must_use]
    pub fn status(&self) -> StatusText { self.status.snapshot() }

    #[must_use]
    pub fn size(&self) -> TermSize { self.size }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> { self.file_path.as_deref() }

    #[must_use]
    pub fn output(&self) -> &W { &self.output }

    pub fn into_output(self) -> W { self.output }

    /// Rows of text visible at once, used as the PageUp / PageDown distance.
    pub(crate) fn page_rows(&self) -> usize { text_rows(self.size).max(1) }

    /// Scroll so that the cursor is inside the code column.
    pub(crate) fn follow_cursor(&mut self) {
        let layout = self
            .renderer
            .refresh_layout(self.buffer.line_count(), self.size);
        self.viewport
            .follow(self.buffer.cursor(), text_rows(self.size), layout.code_width);
    }

    pub(crate) fn resize(&mut self, size: TermSize) {
        self.size = size;
        self.full_redraw_pending = true;
        self.follow_cursor();
    }

    /// Frame plus the completion popup when it is showing.
    pub(crate) fn compose_frame(&mut self, prompt: Option<&str>) -> String {
        self.follow_cursor();
        let status = self.status.snapshot();
        let full_redraw = std::mem::take(&mut self.full_redraw_pending);

        let frame = FrameInput {
            buffer: &self.buffer,
            viewport: self.viewport,
            status: &status,
            prompt,
            file_name: self.file_label.as_deref(),
            dirty: self.dirty,
            size: self.size,
        };
        let mut acc = self.renderer.render_frame(&frame, full_redraw);

        if let Some(popup) = self.completer.view() {
            acc.push_str(
                &self
                    .renderer
                    .draw_completion_popup(&popup, self.viewport, self.size),
            );
        }
        acc
    }

    /// One `write_all` and one `flush` per frame. A failed write is logged and the next
    /// frame tries again.
    pub(crate) fn write_frame(&mut self, frame: &str) {
        let result = self
            .output
            .write_all(frame.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = result {
            tracing::error!(message = "failed to write frame", error = %err);
        }
    }

    pub fn render(&mut self) {
        let frame = self.compose_frame(None);
        self.write_frame(&frame);
    }
}
