// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc::{self, error::TrySendError};

pub type RedrawReceiver = mpsc::Receiver<()>;

/// Non blocking, coalescing "please redraw" signal backed by a channel of depth 1.
///
/// [`RedrawSignal::notify`] never waits. If a signal is already pending the new one is
/// dropped, since one redraw covers both.
#[derive(Debug, Clone)]
pub struct RedrawSignal {
    tx: mpsc::Sender<()>,
}

/// Create the sending and receiving halves.
#[must_use]
pub fn redraw_channel() -> (RedrawSignal, RedrawReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (RedrawSignal { tx }, rx)
}

impl RedrawSignal {
    pub fn notify(&self) {
        match self.tx.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => {}
            Err(TrySendError::Closed(())) => {
                tracing::debug!(message = "redraw signal: receiver gone");
            }
        }
    }
}
