// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Diagnostic error types for the two places where the engine can fail:
//!
//! 1. Startup (before the main loop runs). These abort [`open_and_run()`].
//! 2. Persisting the buffer on an explicit save. These are captured as status text and
//!    never interrupt the loop.
//!
//! Everything else (buffer edits, decoding, rendering, completion, validation) is total
//! and has no error path.
//!
//! [`open_and_run()`]: crate::open_and_run

use miette::Diagnostic;
use std::path::PathBuf;

/// Fatal conditions detected while acquiring the terminal.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum StartupError {
    /// Stdin is a pipe or a file, so there is no keyboard to read from.
    #[error("Input is not an interactive terminal")]
    #[diagnostic(
        code(quill_tui::terminal::not_interactive),
        help("Run the editor from a terminal; piping content into it is not supported")
    )]
    NotInteractive,

    /// The termios attributes could not be read or changed.
    #[error("Failed to enter raw mode: {reason}")]
    #[diagnostic(
        code(quill_tui::terminal::raw_mode),
        help("Make sure the process has a controlling terminal")
    )]
    RawMode { reason: String },

    /// Writing the alternate screen setup sequence failed.
    #[error("Failed to prepare the terminal screen")]
    #[diagnostic(code(quill_tui::terminal::screen_setup))]
    ScreenSetup(#[source] std::io::Error),

    /// The `SIGWINCH` listener could not be installed.
    #[error("Failed to install the terminal resize listener")]
    #[diagnostic(
        code(quill_tui::terminal::resize_listener),
        help("Signal handler creation failed - check system signal limits")
    )]
    ResizeListener(#[source] std::io::Error),
}

/// A failed explicit save. Rendered into the status bar via its [`std::fmt::Display`].
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PersistError {
    #[error("no file path, the buffer was opened without one")]
    #[diagnostic(code(quill_tui::persist::no_path))]
    NoPath,

    #[error("could not write {}: {source}", path.display())]
    #[diagnostic(code(quill_tui::persist::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    #[diagnostic(code(quill_tui::persist::external))]
    External(String),
}
