// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for the editor.
//!
//! In the default "cooked" mode the kernel line discipline buffers input until Enter,
//! echoes typed characters and turns `Ctrl+C` into `SIGINT`. The editor needs every
//! keystroke as raw bytes (including escape sequences), so it switches the terminal to
//! raw mode for the whole session and restores the saved termios on exit.
//!
//! On Unix this uses rustix's safe termios API (`tcgetattr()` / `tcsetattr()` with
//! `make_raw()`), the same mechanism `stty raw -echo` uses.
//!
//! The recommended way to use raw mode is with the [`RawModeGuard`]:
//!
//! ```no_run
//! use quill_tui::RawModeGuard;
//!
//! {
//!     let _guard = RawModeGuard::new().expect("Failed to enable raw mode");
//!     // Terminal is now in raw mode.
//! } // Raw mode automatically disabled when guard is dropped.
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
