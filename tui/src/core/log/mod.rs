// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging for the editor, built on [`tracing`] and [`tracing_subscriber`] layers.
//!
//! While the editor owns the terminal (raw mode + alternate screen) nothing may be
//! printed to stdout or stderr, so the host binary normally uses
//! [`WriterConfig::File`]. The display writers exist for tools and tests that run
//! without a full-screen UI.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
