// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action;
pub mod caret_nav;
pub mod edit_history;
pub mod pos;
pub mod text_buffer;

// Re-export.
pub use action::*;
pub use caret_nav::*;
pub use edit_history::*;
pub use pos::*;
pub use text_buffer::*;

/// Undo entries kept before the oldest is dropped.
pub const DEFAULT_UNDO_CAPACITY: usize = 500;

/// Spaces inserted by the Tab key. The stop is fixed, it does not depend on the column.
pub const TAB_WIDTH: usize = 2;
