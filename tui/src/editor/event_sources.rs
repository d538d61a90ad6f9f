// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words SIGWINCH

use crate::{KeyEvent, StartupError, TermSize, get_size_or_default, spawn_key_decoder,
            spawn_stdin_reader_thread};
use std::time::Duration;
use tokio::{signal::unix::{SignalKind, signal},
            sync::{mpsc, watch},
            task::JoinHandle};

pub type KeyReceiver = mpsc::Receiver<KeyEvent>;

/// Holds only the latest terminal size. A burst of `SIGWINCH` signals collapses into one
/// pending change.
pub type ResizeReceiver = watch::Receiver<TermSize>;

/// Install the `SIGWINCH` listener. Each signal re-queries the terminal size and
/// publishes it.
///
/// # Errors
///
/// Returns [`StartupError::ResizeListener`] if the signal handler can't be registered.
pub fn spawn_resize_listener(
    initial: TermSize,
) -> Result<(ResizeReceiver, JoinHandle<()>), StartupError> {
    let mut sigwinch =
        signal(SignalKind::window_change()).map_err(StartupError::ResizeListener)?;
    let (tx, rx) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        while sigwinch.recv().await.is_some() {
            let size = get_size_or_default();
            tracing::debug!(message = "terminal resized", size = %size);
            if tx.send(size).is_err() {
                break;
            }
        }
    });

    Ok((rx, handle))
}

/// Start the stdin reader thread and the key decoder task that consumes its bytes.
///
/// # Errors
///
/// Returns an error if the reader thread can't be spawned.
pub fn spawn_key_pipeline(
    byte_queue_capacity: usize,
    lookahead: Duration,
    key_capacity: usize,
) -> std::io::Result<(KeyReceiver, JoinHandle<()>)> {
    let byte_rx = spawn_stdin_reader_thread(byte_queue_capacity)?;
    Ok(spawn_key_decoder(byte_rx, lookahead, key_capacity))
}
