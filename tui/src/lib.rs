// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words SIGWINCH

//! # quill_tui
//!
//! The interactive terminal editing engine used by the `quill` command line tool. It is
//! a small, full screen, line oriented text editor that runs inside the alternate screen
//! buffer of a VT100 compatible terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ bytes  ┌─────────────┐ KeyEvent ┌──────────────────────────────┐
//! │ stdin reader │──────▶│ key decoder │────────▶│ editor main loop             │
//! │ (std thread) │ mpsc   │ (tokio task)│ mpsc     │  tokio::select! {            │
//! └──────────────┘        └─────────────┘          │    resize  (SIGWINCH)        │
//!                                                  │    redraw  (validator)       │
//!                                                  │    key     (decoder)         │
//!                                                  │  }                           │
//!                                                  └──────────────┬───────────────┘
//!                                                                 │
//!              ┌───────────────┬────────────────┬─────────────────┼───────────────┐
//!              ▼               ▼                ▼                 ▼               ▼
//!          TextBuffer      Completer        Validator          Renderer        Persist
//! ```
//!
//! - [`TextBuffer`] holds the lines, the cursor and an invertible undo/redo log.
//! - The decoder resolves UTF-8, CSI / SS3 escape sequences and CR / LF ambiguity into
//!   [`KeyEvent`]s. It is the only thing that ever reads raw bytes, so a modal prompt
//!   and the main loop can never race for keystrokes.
//! - [`Validator`] debounces calls to an external validate function and signals a
//!   redraw through a depth-1 channel when a result arrives.
//! - [`Renderer`] turns a snapshot of the editor state into one ANSI frame.
//!
//! The entry point is [`open_and_run()`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod buffer;
pub mod completer;
pub mod core;
pub mod editor;
pub mod input;
pub mod render;
pub mod validator;

// Re-export.
pub use buffer::*;
pub use completer::*;
pub use core::*;
pub use editor::*;
pub use input::*;
pub use render::*;
pub use validator::*;

/// Log every byte chunk read from stdin and every decoded key.
pub const DEBUG_QUILL_SHOW_INPUT: bool = false;

/// Log each frame's size and the layout it was rendered with.
pub const DEBUG_QUILL_SHOW_RENDER: bool = false;

/// Log validator scheduling and results.
pub const DEBUG_QUILL_SHOW_VALIDATION: bool = true;

/// Log editor commands (save, undo, completion, menu actions).
pub const DEBUG_QUILL_SHOW_COMMANDS: bool = true;
