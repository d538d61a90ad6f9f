// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod dsl_check;
pub mod launcher;
pub mod pattern_registry;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use dsl_check::*;
pub use launcher::*;
pub use pattern_registry::*;
pub use ui_str::*;
