// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI rendering. The screen is laid out as:
//!
//! ```text
//! row 1          │ title bar (reverse video)                                     │
//! rows 2..=h-1   │ gutter │ code (colorized, clipped)          │ block annotation │
//! row h          │ status bar: Ln r, Col c  OK | ERR msg  message                │
//! ```
//!
//! [`Renderer::render_frame`] produces a complete frame as one `String`. Popups (the
//! completion list and the command menu) are separate overlay draws appended after it.

// Attach sources.
pub mod bars;
pub mod block_context;
pub mod layout;
pub mod overlays;
pub mod renderer;
pub mod syntax;
pub mod viewport;

// Re-export.
pub use bars::*;
pub use block_context::*;
pub use layout::*;
pub use overlays::*;
pub use renderer::*;
pub use syntax::*;
pub use viewport::*;
