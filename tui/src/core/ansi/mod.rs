// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_text;
pub mod constants;
pub mod terminal_raw_mode;

// Re-export.
pub use ansi_text::*;
pub use constants::*;
pub use terminal_raw_mode::*;
