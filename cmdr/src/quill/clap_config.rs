// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use quill_tui::{DEFAULT_UNDO_CAPACITY, EditorConfig};
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "quill")]
#[command(about = "Edit quill UI DSL files, with live validation and completion")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nProvide a file path to edit it, or no arguments to edit a scratch buffer.\nUSAGE:\n  quill [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_DEBOUNCE_MS,
        help = "Quiet period after the last keystroke before the file is validated."
    )]
    pub debounce_ms: u64,

    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_UNDO_CAPACITY,
        help = "Maximum number of edits that can be undone."
    )]
    pub undo_limit: usize,
}

impl CLIArg {
    #[must_use]
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            undo_capacity: self.global_options.undo_limit,
            validation_debounce: Duration::from_millis(self.global_options.debounce_ms),
            ..EditorConfig::default()
        }
    }
}
