// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty winsize tcgetwinsize

use std::fmt::{Display, Formatter};

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TermSize {
    fn default() -> Self {
        Self {
            cols: DEFAULT_WIDTH,
            rows: DEFAULT_HEIGHT,
        }
    }
}

impl Display for TermSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Get the terminal width. If there is a problem, return the default width.
#[must_use]
pub fn get_terminal_width() -> u16 {
    match get_size() {
        Ok(size) => size.cols,
        Err(_) => DEFAULT_WIDTH,
    }
}

/// Get the terminal size using the [`rustix`] [`tcgetwinsize`] syscall on stdout.
///
/// Some pseudo terminals report `0x0` before the emulator has sized them; that is
/// replaced with [`TermSize::default()`] so that layout math always has a usable area.
///
/// # Errors
///
/// Returns an error if:
/// - The terminal size cannot be determined
/// - The terminal is not available or not a TTY
///
/// [`tcgetwinsize`]: fn@rustix::termios::tcgetwinsize
pub fn get_size() -> miette::Result<TermSize> {
    let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
        .map_err(|e| miette::miette!("tcgetwinsize failed: {}", e))?;
    Ok(sanitize_size(winsize.ws_col, winsize.ws_row))
}

/// Same as [`get_size()`] but never fails.
#[must_use]
pub fn get_size_or_default() -> TermSize { get_size().unwrap_or_default() }

fn sanitize_size(cols: u16, rows: u16) -> TermSize {
    if cols == 0 || rows == 0 {
        TermSize::default()
    } else {
        TermSize { cols, rows }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] if stdin is an interactive terminal (TTY).
///
/// The editor needs stdin to be a TTY to read keystrokes; a piped stdin is a fatal
/// startup condition.
#[must_use]
pub fn is_stdin_interactive() -> TTYResult {
    if rustix::termios::isatty(std::io::stdin()) {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}
