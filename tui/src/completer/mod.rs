// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod completer_state;
pub mod keywords;
pub mod pattern_source;

// Re-export.
pub use completer_state::*;
pub use keywords::*;
pub use pattern_source::*;

/// Most candidates shown (and cycled through) at once.
pub const DEFAULT_MAX_VISIBLE_COMPLETIONS: usize = 8;
