// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # quill
//!
//! A full screen terminal editor for quill UI DSL files, built on [`quill_tui`].
//!
//! ```text
//! quill [file path] [-l] [--debounce-ms N] [--undo-limit N]
//! ```
//!
//! This crate supplies the concrete collaborators that the editing engine calls out to:
//!
//! - [`quill::validate_source`]: a structural checker (balanced brackets, terminated
//!   strings) that runs in the background after typing pauses.
//! - [`quill::PatternRegistry`]: snippets offered by the completion popup.
//! - [`quill_tui::FilePersist`]: writes the buffer back on `Ctrl+S`.
//!
//! Key bindings: `Ctrl+S` save, `Ctrl+Q` quit, `Ctrl+Z` / `Ctrl+Y` undo / redo,
//! `Ctrl+N` or `Ctrl+Space` complete, `Ctrl+G` go to line, `Esc` command menu.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod quill;

// Re-export.
pub use quill::*;
