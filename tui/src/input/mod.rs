// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard input: from raw stdin bytes to ordered [`KeyEvent`]s.
//!
//! ```text
//! stdin ──▶ stdin reader thread ──▶ byte queue ──▶ key decoder task ──▶ key channel
//!           (blocking read)         (bounded)      (ByteSource +        (bounded,
//!                                                   pushback slot)       ordered)
//! ```
//!
//! Exactly one task owns the [`ByteSource`], and so the partially decoded state of an
//! escape sequence. Everything downstream (the editor loop, the command menu, the go to
//! line prompt) reads from the one key channel.

// Attach sources.
pub mod byte_source;
pub mod key_decoder;
pub mod key_event;
pub mod stdin_reader_thread;

// Re-export.
pub use byte_source::*;
pub use key_decoder::*;
pub use key_event::*;
pub use stdin_reader_thread::*;
