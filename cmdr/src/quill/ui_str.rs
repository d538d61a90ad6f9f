// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use quill_tui::SessionSummary;
use std::path::Path;

/// Shown under every error report.
pub const ERROR_REPORT_FOOTER: &str = "Run `quill --help` for usage. Pass `-l` to write a log to log.txt.";

/// Printed after the terminal has been restored.
#[must_use]
pub fn exit_msg(summary: &SessionSummary, file_path: Option<&Path>) -> Option<String> {
    if !summary.dirty.is_dirty() {
        return None;
    }
    Some(match file_path {
        Some(path) => format!("Quit without saving, changes to {} were discarded.", path.display()),
        None => "Quit without saving, the scratch buffer was discarded.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_tui::DirtyState;

    fn summary(dirty: DirtyState) -> SessionSummary {
        SessionSummary {
            final_content: "x\n".into(),
            dirty,
        }
    }

    #[test]
    fn clean_exit_prints_nothing() {
        assert_eq!(exit_msg(&summary(DirtyState::Clean), None), None);
    }

    #[test]
    fn dirty_exit_names_the_file() {
        assert_eq!(
            exit_msg(&summary(DirtyState::Dirty), Some(Path::new("main.ql"))).as_deref(),
            Some("Quit without saving, changes to main.ql were discarded.")
        );
        assert!(
            exit_msg(&summary(DirtyState::Dirty), None)
                .unwrap()
                .contains("scratch")
        );
    }
}
