// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{StdinReadResult, StdinReceiver};
use crate::DEBUG_QUILL_SHOW_INPUT;
use std::{collections::VecDeque, time::Duration};

/// Outcome of reading one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRead {
    Byte(u8),
    /// No byte arrived within the lookahead window.
    TimedOut,
    /// The reader thread hit EOF or an error. Every later read returns this too.
    Closed,
}

/// Byte-at-a-time view over the chunked byte queue, with a one byte pushback slot.
///
/// Read order is always: pushback slot, then the rest of the current chunk, then the
/// channel. A byte pushed back after a lookahead is therefore returned by the very next
/// read, ahead of anything still queued.
#[derive(Debug)]
pub struct ByteSource {
    rx: StdinReceiver,
    pending: VecDeque<u8>,
    pushback: Option<u8>,
    closed: bool,
}

impl ByteSource {
    #[must_use]
    pub fn new(rx: StdinReceiver) -> Self {
        Self {
            rx,
            pending: VecDeque::new(),
            pushback: None,
            closed: false,
        }
    }

    /// Return `byte` to the front of the stream.
    pub fn push_back(&mut self, byte: u8) {
        if let Some(held) = self.pushback.replace(byte) {
            // Slot was occupied, keep it next in line behind the new byte.
            self.pending.push_front(held);
        }
    }

    #[must_use]
    pub fn has_pushback(&self) -> bool { self.pushback.is_some() }

    /// Wait as long as it takes for the next byte.
    pub async fn read_byte(&mut self) -> ByteRead {
        if let Some(byte) = self.take_buffered() {
            return ByteRead::Byte(byte);
        }
        loop {
            if self.closed {
                return ByteRead::Closed;
            }
            let result = self.rx.recv().await;
            if let Some(byte) = self.accept(result) {
                return ByteRead::Byte(byte);
            }
        }
    }

    /// Wait at most `timeout` for the next byte. Used for every lookahead inside an
    /// escape sequence, a CR, or a multi byte UTF-8 code point.
    pub async fn read_byte_timeout(&mut self, timeout: Duration) -> ByteRead {
        if let Some(byte) = self.take_buffered() {
            return ByteRead::Byte(byte);
        }
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.closed {
                return ByteRead::Closed;
            }
            match tokio::time::timeout_at(deadline, self.rx.recv()).await {
                Ok(result) => {
                    if let Some(byte) = self.accept(result) {
                        return ByteRead::Byte(byte);
                    }
                }
                Err(_elapsed) => return ByteRead::TimedOut,
            }
        }
    }

    fn take_buffered(&mut self) -> Option<u8> {
        self.pushback.take().or_else(|| self.pending.pop_front())
    }

    /// Absorb one message from the channel, returning its first byte if it had any.
    fn accept(&mut self, result: Option<StdinReadResult>) -> Option<u8> {
        match result {
            Some(StdinReadResult::Data(chunk)) => {
                DEBUG_QUILL_SHOW_INPUT.then(|| {
                    tracing::debug!(message = "byte-source: chunk", bytes = ?chunk);
                });
                self.pending.extend(chunk);
                self.pending.pop_front()
            }
            Some(StdinReadResult::Eof) | None => {
                self.closed = true;
                None
            }
            Some(StdinReadResult::Error(kind)) => {
                tracing::warn!(message = "byte-source: reader failed", error = ?kind);
                self.closed = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOOKAHEAD: Duration = Duration::from_millis(20);

    fn source_with(chunks: &[&[u8]]) -> (ByteSource, tokio::sync::mpsc::Sender<StdinReadResult>) {
        let (tx, rx) = tokio::sync::mpsc::channel(16);
        for chunk in chunks {
            tx.try_send(StdinReadResult::Data(chunk.to_vec())).unwrap();
        }
        (ByteSource::new(rx), tx)
    }

    #[tokio::test]
    async fn reads_across_chunks_in_order() {
        let (mut source, _tx) = source_with(&[b"ab", b"c"]);
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'a'));
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'b'));
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'c'));
    }

    #[tokio::test]
    async fn pushback_comes_before_pending_bytes() {
        let (mut source, _tx) = source_with(&[b"xy"]);
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'x'));
        source.push_back(b'x');
        assert!(source.has_pushback());
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'x'));
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'y'));
    }

    #[tokio::test]
    async fn pushback_is_returned_by_timed_read() {
        let (mut source, _tx) = source_with(&[]);
        source.push_back(b'q');
        assert_eq!(source.read_byte_timeout(LOOKAHEAD).await, ByteRead::Byte(b'q'));
    }

    #[tokio::test]
    async fn timed_read_times_out_when_nothing_arrives() {
        let (mut source, _tx) = source_with(&[]);
        assert_eq!(source.read_byte_timeout(LOOKAHEAD).await, ByteRead::TimedOut);
    }

    #[tokio::test]
    async fn eof_closes_for_good() {
        let (mut source, tx) = source_with(&[b"z"]);
        tx.try_send(StdinReadResult::Eof).unwrap();
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'z'));
        assert_eq!(source.read_byte().await, ByteRead::Closed);
        assert_eq!(source.read_byte_timeout(LOOKAHEAD).await, ByteRead::Closed);
    }

    #[tokio::test]
    async fn dropped_sender_closes() {
        let (mut source, tx) = source_with(&[]);
        drop(tx);
        assert_eq!(source.read_byte().await, ByteRead::Closed);
    }

    #[tokio::test]
    async fn empty_chunk_is_skipped() {
        let (mut source, _tx) = source_with(&[b"", b"k"]);
        assert_eq!(source.read_byte().await, ByteRead::Byte(b'k'));
    }
}
