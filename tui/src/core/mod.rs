// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Low level building blocks shared by every part of the editing engine: ANSI constants
//! and text measuring, raw mode, terminal size, logging, and the error types.

// Connect to source file.
pub mod ansi;
pub mod common;
pub mod log;
pub mod term;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
pub use term::*;
