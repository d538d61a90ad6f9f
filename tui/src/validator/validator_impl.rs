// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Debounced background validation.
//!
//! ```text
//! schedule(c1) ──┐  schedule(c2) ──┐                     
//!                ▼ (abort c1 timer) ▼                   
//!                ├────── debounce ──┼────── debounce ──▶ validate(c2) ──▶ status + redraw
//! ```
//!
//! Each [`Validator::schedule`] call cancels the pending timer and starts a new one, so
//! the external validate function only runs once the user pauses typing. It runs on the
//! blocking pool because it may be slow, and its result is written to the shared
//! [`StatusText`](crate::StatusText) before a redraw is signalled.

use super::{RedrawSignal, SharedStatus, ValidationStatus};
use crate::DEBUG_QUILL_SHOW_VALIDATION;
use std::{fmt::{Debug, Formatter},
          sync::Arc,
          time::Duration};
use tokio::task::JoinHandle;

pub const DEFAULT_VALIDATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// External correctness check, eg: the DSL compiler front end. Returns `(valid,
/// message)`; the message is only shown when `valid` is false.
///
/// Any `Fn(&str) -> (bool, String)` closure works.
pub trait Validate: Send + Sync {
    fn validate(&self, content: &str) -> (bool, String);
}

impl<F> Validate for F
where
    F: Fn(&str) -> (bool, String) + Send + Sync,
{
    fn validate(&self, content: &str) -> (bool, String) { self(content) }
}

pub struct Validator {
    validate: Arc<dyn Validate>,
    status: SharedStatus,
    redraw: RedrawSignal,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debug for Validator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("debounce", &self.debounce)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl Validator {
    #[must_use]
    pub fn new(
        validate: Arc<dyn Validate>,
        status: SharedStatus,
        redraw: RedrawSignal,
        debounce: Duration,
    ) -> Self {
        Self {
            validate,
            status,
            redraw,
            debounce,
            pending: None,
        }
    }

    /// Restart the debounce timer with `content`. Must be called from within a tokio
    /// runtime.
    pub fn schedule(&mut self, content: String) {
        self.cancel_pending();

        let validate = Arc::clone(&self.validate);
        let status = self.status.clone();
        let redraw = self.redraw.clone();
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let result =
                tokio::task::spawn_blocking(move || validate.validate(&content)).await;
            let validation = match result {
                Ok((true, _)) => ValidationStatus::Valid,
                Ok((false, message)) => ValidationStatus::Invalid(message),
                Err(join_error) => {
                    tracing::error!(message = "validator panicked", error = %join_error);
                    ValidationStatus::Invalid("validator failed".to_string())
                }
            };

            DEBUG_QUILL_SHOW_VALIDATION.then(|| {
                tracing::debug!(message = "validation finished", result = ?validation);
            });
            status.set_validation(validation);
            redraw.notify();
        }));
    }

    /// Whether a scheduled check has not finished yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|it| !it.is_finished())
    }

    /// Cancel any pending check. Called at shutdown.
    pub fn stop(&mut self) { self.cancel_pending(); }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Validator {
    fn drop(&mut self) { self.cancel_pending(); }
}
