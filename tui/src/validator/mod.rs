// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod redraw_signal;
pub mod status_text;
pub mod validator_impl;

// Re-export.
pub use redraw_signal::*;
pub use status_text::*;
pub use validator_impl::*;
