// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_enums;
pub mod common_errors;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use common_enums::*;
pub use common_errors::*;
pub use miette_setup_global_report_handler::*;

/// Shorthand so that call sites read `StdMutex` when a blocking (non-async) mutex is
/// intentionally used across a task boundary.
pub type StdMutex<T> = std::sync::Mutex<T>;
