// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-neutral raw mode API, backed by [`raw_mode_unix`].
//!
//! [`raw_mode_unix`]: super::raw_mode_unix

use super::raw_mode_unix;
use crate::StartupError;

/// Enable raw mode on the controlling terminal, saving the original settings the first
/// time it is called.
///
/// # Errors
///
/// Returns [`StartupError::RawMode`] if the terminal attributes cannot be read or set.
pub fn enable_raw_mode() -> Result<(), StartupError> { raw_mode_unix::enable_raw_mode() }

/// Restore the terminal settings saved by [`enable_raw_mode()`]. No-op if raw mode was
/// never enabled.
///
/// # Errors
///
/// Returns [`StartupError::RawMode`] if the saved attributes cannot be applied.
pub fn disable_raw_mode() -> Result<(), StartupError> {
    raw_mode_unix::disable_raw_mode()
}

/// RAII guard: raw mode is on while this value lives.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    pub fn new() -> Result<Self, StartupError> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(message = "failed to restore terminal settings", error = %err);
        }
    }
}
