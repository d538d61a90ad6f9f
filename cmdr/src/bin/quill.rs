// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use quill_cmdr::{CLIArg, ERROR_REPORT_FOOTER, exit_msg, run_app};
use quill_tui::{setup_default_miette_global_report_handler, try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ERROR_REPORT_FOOTER);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    if should_log {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_app(&cli_arg).await;

    match &result {
        Ok(summary) => {
            if let Some(msg) = exit_msg(summary, cli_arg.file_path.as_deref()) {
                println!("{msg}");
            }
        }
        Err(report) => {
            tracing::error!(message = "Could not run quill", error = ?report);
        }
    }

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result.map(|_| ())
}
