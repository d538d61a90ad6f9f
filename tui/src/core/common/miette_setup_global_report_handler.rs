// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Installs a graphical [`miette`] report handler sized to the terminal. Startup errors
//! from the editor surface through this handler after the terminal has been restored.

use crate::get_terminal_width;
use miette::MietteHandlerOpts;
use tracing::debug;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    let result = miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = usize::from(get_terminal_width());
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(2)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }));
    if let Err(err) = result {
        debug!("miette::set_hook -> already installed: {}", err);
    }
}
