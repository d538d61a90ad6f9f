// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen control sequences written by the renderer and the terminal session.

/// Alternate Screen Buffer Mode - DEC mode 1049.
///
/// Used by full-screen applications to avoid cluttering shell history. The original
/// screen is restored when the application leaves this mode.
pub const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
pub const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";

/// DECTCEM cursor visibility.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Erase the whole display.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Erase from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &str = "\x1b[K";

/// Move to row 1, column 1.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Absolute cursor position (CUP). Rows and columns are 1-based.
#[must_use]
pub fn cursor_to(row: usize, col: usize) -> String { format!("\x1b[{row};{col}H") }
