// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLEAR_SCREEN, ENTER_ALT_SCREEN, LEAVE_ALT_SCREEN, RawModeGuard, SGR_RESET,
            SHOW_CURSOR, StartupError, TTYResult, is_stdin_interactive};
use std::io::Write;

/// Owns the terminal for the lifetime of an editing session: raw mode plus the alternate
/// screen.
///
/// Dropping it leaves the alternate screen, shows the cursor and then restores the saved
/// termios (via the inner [`RawModeGuard`]), so the shell gets its terminal back on every
/// exit path, including errors and panics that unwind.
#[derive(Debug)]
pub struct TerminalSession {
    _raw_mode: RawModeGuard,
}

impl TerminalSession {
    /// # Errors
    ///
    /// - [`StartupError::NotInteractive`] if stdin is not a terminal.
    /// - [`StartupError::RawMode`] if the termios attributes can't be changed.
    /// - [`StartupError::ScreenSetup`] if the alternate screen can't be entered.
    pub fn try_enter() -> Result<Self, StartupError> {
        if is_stdin_interactive() == TTYResult::IsNotInteractive {
            return Err(StartupError::NotInteractive);
        }

        let raw_mode = RawModeGuard::new()?;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(format!("{ENTER_ALT_SCREEN}{CLEAR_SCREEN}").as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(StartupError::ScreenSetup)?;

        tracing::debug!(message = "terminal session started");
        Ok(Self {
            _raw_mode: raw_mode,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = std::io::stdout().lock();
        let result = stdout
            .write_all(format!("{SGR_RESET}{SHOW_CURSOR}{LEAVE_ALT_SCREEN}").as_bytes())
            .and_then(|()| stdout.flush());
        if let Err(err) = result {
            tracing::error!(message = "failed to leave the alternate screen", error = %err);
        }
        tracing::debug!(message = "terminal session ended");
    }
}
