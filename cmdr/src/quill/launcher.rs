// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, PatternRegistry, validate_source};
use miette::{IntoDiagnostic, WrapErr};
use quill_tui::{Collaborators, FilePersist, NoPersist, Persist, SessionSummary, open_and_run};
use std::{io::ErrorKind, path::Path, sync::Arc};

/// Open the file named on the command line (or a scratch buffer) in the editor.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read, or if the editor can't take
/// over the terminal.
pub async fn run_app(cli_arg: &CLIArg) -> miette::Result<SessionSummary> {
    let file_path = cli_arg.file_path.clone();
    let content = load_document(file_path.as_deref())?;

    let persist: Arc<dyn Persist> = match &file_path {
        Some(path) => Arc::new(FilePersist::new(path)),
        None => Arc::new(NoPersist),
    };
    let collaborators = Collaborators {
        validate: Arc::new(validate_source),
        patterns: Arc::new(PatternRegistry::default()),
        persist,
    };

    open_and_run(&content, file_path, collaborators, cli_arg.editor_config()).await
}

/// Content of `path`. A file that does not exist yet opens as an empty buffer and is
/// created on the first save.
///
/// # Errors
///
/// Returns an error for any read failure other than "not found", eg: permissions or
/// invalid UTF-8.
pub fn load_document(path: Option<&Path>) -> miette::Result<String> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(message = "new file", path = %path.display());
            Ok(String::new())
        }
        Err(err) => Err(err)
            .into_diagnostic()
            .wrap_err_with(|| format!("could not read {}", path.display())),
    }
}
