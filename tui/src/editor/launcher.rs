// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Collaborators, Editor, EditorChannels, EditorConfig, TerminalSession,
            spawn_key_pipeline, spawn_resize_listener};
use crate::{DirtyState, get_size_or_default};
use miette::IntoDiagnostic;
use std::path::PathBuf;

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_content: String,
    pub dirty: DirtyState,
}

/// Take over the terminal, edit `content` until the user quits, then give the terminal
/// back.
///
/// Only startup can fail. Once the main loop runs, every error (a failed save, a
/// failed frame write) is reported in the status bar or the log instead.
///
/// # Errors
///
/// Returns an error if stdin is not interactive, raw mode can't be entered, or the
/// input and resize tasks can't be started.
pub async fn open_and_run(
    content: &str,
    file_path: Option<PathBuf>,
    collaborators: Collaborators,
    config: EditorConfig,
) -> miette::Result<SessionSummary> {
    let session = TerminalSession::try_enter()?;
    let size = get_size_or_default();

    let (resize, resize_task) = spawn_resize_listener(size)?;
    let (keys, decoder_task) = spawn_key_pipeline(
        config.byte_queue_capacity,
        config.escape_lookahead,
        config.key_channel_capacity,
    )
    .into_diagnostic()?;

    tracing::info!(message = "editor started", size = %size, path = ?file_path);

    let (mut editor, redraw) =
        Editor::new(content, file_path, collaborators, &config, size, std::io::stdout());
    editor
        .run(EditorChannels {
            keys,
            redraw,
            resize,
        })
        .await;

    resize_task.abort();
    decoder_task.abort();
    drop(session);

    Ok(SessionSummary {
        final_content: editor.buffer().content(),
        dirty: editor.dirty(),
    })
}
