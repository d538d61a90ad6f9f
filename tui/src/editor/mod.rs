// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor_commands;
pub mod editor_config;
pub mod editor_loop;
pub mod editor_struct;
pub mod event_sources;
pub mod keymap;
pub mod launcher;
pub mod menu;
pub mod persist;
pub mod prompt;
pub mod terminal_session;

// Re-export.
pub use editor_commands::*;
pub use editor_config::*;
pub use editor_loop::*;
pub use editor_struct::*;
pub use event_sources::*;
pub use keymap::*;
pub use launcher::*;
pub use menu::*;
pub use persist::*;
pub use prompt::*;
pub use terminal_session::*;
