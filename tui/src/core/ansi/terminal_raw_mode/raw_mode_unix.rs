// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use crate::StartupError;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};
use std::{fs::File,
          io,
          sync::{LazyLock, Mutex}};

/// Stores the original terminal settings to restore later.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Represents either stdin or `/dev/tty` for terminal operations.
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

fn raw_mode_error(reason: impl std::fmt::Display) -> StartupError {
    StartupError::RawMode {
        reason: reason.to_string(),
    }
}

/// Gets a file descriptor for the controlling terminal: stdin if it is a tty, otherwise
/// `/dev/tty`.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Save the original settings (once), then apply `make_raw()`: no canonical mode, no
/// echo, no signal generation, `VMIN=1`, `VTIME=0` for byte-by-byte reads.
pub fn enable_raw_mode() -> Result<(), StartupError> {
    let fd = get_terminal_fd()
        .map_err(|e| raw_mode_error(format!("no terminal file descriptor: {e}")))?;

    let mut termios = termios::tcgetattr(&fd)
        .map_err(|e| raw_mode_error(format!("tcgetattr failed: {e}")))?;

    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|e| raw_mode_error(format!("terminal settings lock poisoned: {e}")))?;

        if original.is_none() {
            // rustix's Termios doesn't implement Copy.
            *original = Some(termios.clone());
        }
    }

    termios.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &termios)
        .map_err(|e| raw_mode_error(format!("tcsetattr failed: {e}")))?;

    Ok(())
}

/// Restore the settings saved by [`enable_raw_mode()`]. No-op if raw mode was never
/// enabled.
pub fn disable_raw_mode() -> Result<(), StartupError> {
    let original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|e| raw_mode_error(format!("terminal settings lock poisoned: {e}")))?;

    if let Some(ref termios) = *original {
        let fd = get_terminal_fd()
            .map_err(|e| raw_mode_error(format!("no terminal file descriptor: {e}")))?;

        termios::tcsetattr(&fd, OptionalActions::Now, termios)
            .map_err(|e| raw_mode_error(format!("tcsetattr failed: {e}")))?;
    }
    Ok(())
}
