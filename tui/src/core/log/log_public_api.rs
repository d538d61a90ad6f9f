// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, try_create_layers};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [global default tracing subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html).
///
/// Passing a config whose writer is [`crate::WriterConfig::None`] leaves tracing
/// uninitialized, so every `tracing::*!` call becomes a no-op.
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(
    tracing_config: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let tracing_config: TracingConfig = tracing_config.into();
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| miette::miette!("failed to install the tracing subscriber: {e}"))
}
