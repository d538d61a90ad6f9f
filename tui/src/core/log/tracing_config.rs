// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File(String)` is the log file path, eg: `/tmp/quill.log` or `log.txt`.
/// - `DisplayPreference` is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to a file only. This is the only safe option while the editor is running.
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    /// Logging turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

// XMARK: Clever Rust, use of `impl Into<ConfigStruct>` for elegant constructor config options.
impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`TracingConfig`] instances together.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self` if
/// it has a "some" value. That is, the value in `rhs` has higher specificity.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, wc_rhs) => wc_rhs,
            (wc_lhs, None) => wc_lhs,
            (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

            // Collision (rhs has higher specificity).
            (Display(_), Display(dp_rhs)) => Display(dp_rhs),
            (File(_), File(f_rhs)) => File(f_rhs),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                DisplayAndFile(dp_rhs, f_rhs)
            }
            (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
            (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
        }
    }
}
