// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EINTR

//! Dedicated stdin reader thread using [`std::io::stdin()`].
//!
//! **We do NOT use [`tokio::io::stdin()`]**: it spawns blocking reads on Tokio's
//! blocking pool, and a read "cancelled" by a losing [`tokio::select!`] branch keeps
//! running in the background, so the next read races it. Instead a dedicated thread
//! performs **blocking** reads and sends each chunk through a bounded
//! [`tokio::sync::mpsc`] channel. Receiving from that channel is cancel safe.
//!
//! ```text
//! ┌─────────────────────────┐       ┌─────────────────────────────────┐
//! │ Dedicated Thread        │       │ Key decoder task                │
//! │ (std::thread::spawn)    │       │                                 │
//! │ loop {                  │──────▶│   ByteSource::read_byte()       │
//! │   stdin.read_blocking() │ mpsc  │   ByteSource::read_byte_timeout │
//! │   tx.blocking_send(..)  │       │                                 │
//! │ }                       │       │                                 │
//! └─────────────────────────┘       └─────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! The thread can't be cancelled, so it owns stdin exclusively for the life of the
//! process. It exits on its own when:
//! 1. stdin reaches EOF ([`StdinReadResult::Eof`] is sent first).
//! 2. A read fails with anything other than `EINTR` ([`StdinReadResult::Error`] is sent
//!    first).
//! 3. The receiver was dropped, so the next send fails.
//!
//! Otherwise the OS cleans it up when the process exits. It is blocked on `read()` and
//! owns no resources (fd 0 is not ours to close).
//!
//! The channel is bounded: when the decoder falls behind, the thread blocks in
//! [`Sender::blocking_send`] and the kernel buffers the rest, which is the natural back
//! pressure for a keyboard.
//!
//! [`Sender::blocking_send`]: tokio::sync::mpsc::Sender::blocking_send
//! [`std::io::stdin()`]: std::io::stdin
//! [`tokio::io::stdin()`]: tokio::io::stdin
//! [`tokio::select!`]: tokio::select
//! [`tokio::sync::mpsc`]: tokio::sync::mpsc

use crate::DEBUG_QUILL_SHOW_INPUT;
use std::io::Read;

/// Bytes requested from the OS per `read()` call.
pub const STDIN_READ_BUFFER_SIZE: usize = 1024;

/// Result of a stdin read operation, sent through the channel.
#[derive(Debug)]
pub enum StdinReadResult {
    /// Successfully read bytes from stdin.
    Data(Vec<u8>),
    /// EOF reached (0 bytes read).
    Eof,
    /// Error occurred during read.
    Error(std::io::ErrorKind),
}

/// Sender end of the byte queue, held by the reader thread.
pub type StdinSender = tokio::sync::mpsc::Sender<StdinReadResult>;

/// Receiver end of the byte queue, owned by the [`ByteSource`](crate::ByteSource).
pub type StdinReceiver = tokio::sync::mpsc::Receiver<StdinReadResult>;

/// Creates the byte queue and spawns the dedicated stdin reader thread.
///
/// # Errors
///
/// Returns an error if the OS refuses to spawn the thread.
pub fn spawn_stdin_reader_thread(capacity: usize) -> std::io::Result<StdinReceiver> {
    spawn_reader_thread(std::io::stdin(), capacity)
}

/// Same as [`spawn_stdin_reader_thread()`] but reads from any blocking source. The
/// thread takes ownership of `reader`.
///
/// # Errors
///
/// Returns an error if the OS refuses to spawn the thread.
pub fn spawn_reader_thread<R>(reader: R, capacity: usize) -> std::io::Result<StdinReceiver>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = tokio::sync::mpsc::channel(capacity.max(1));

    std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || reader_loop(reader, &tx))?;

    Ok(rx)
}

/// The main loop of the reader thread.
fn reader_loop<R: Read>(mut reader: R, tx: &StdinSender) {
    let mut buffer = [0u8; STDIN_READ_BUFFER_SIZE];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => {
                DEBUG_QUILL_SHOW_INPUT.then(|| {
                    tracing::debug!(message = "stdin-reader-thread: EOF (0 bytes)");
                });
                if tx.blocking_send(StdinReadResult::Eof).is_err() {
                    tracing::debug!(message = "stdin-reader-thread: receiver gone at EOF");
                }
                break;
            }
            Ok(n) => {
                DEBUG_QUILL_SHOW_INPUT.then(|| {
                    tracing::debug!(
                        message = "stdin-reader-thread: read bytes",
                        bytes_read = n
                    );
                });
                let data = buffer[..n].to_vec();
                if tx.blocking_send(StdinReadResult::Data(data)).is_err() {
                    // Receiver dropped - exit gracefully.
                    tracing::debug!(
                        message = "stdin-reader-thread: receiver dropped, exiting"
                    );
                    break;
                }
            }
            Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => {
                // EINTR - retry immediately (loop continues).
            }
            Err(e) => {
                tracing::warn!(message = "stdin-reader-thread: read error", error = ?e);
                if tx.blocking_send(StdinReadResult::Error(e.kind())).is_err() {
                    tracing::debug!(message = "stdin-reader-thread: receiver gone on error");
                }
                break;
            }
        }
    }
}
