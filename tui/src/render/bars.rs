// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Title and status bars.
//!
//! Both bars are always exactly `cols` visible characters wide. Writing past the last
//! column makes the terminal auto wrap, which shifts every following row and breaks all
//! cursor positioning, so anything too long is cut.

use crate::{DirtyState, FG_ERROR, FG_OK, Pos, SGR_REVERSE, StatusText, StyledLine,
            ValidationStatus, printable, truncate_with_ellipsis};

pub const APP_NAME: &str = "quill";
pub const SCRATCH_NAME: &str = "[scratch]";
pub const DIRTY_MARKER: &str = " [+]";

/// Default cap for the validation error shown in the status bar.
pub const DEFAULT_STATUS_ERROR_CAP: usize = 30;

/// ` quill: <name> [+]` in reverse video.
#[must_use]
pub fn title_bar(file_name: Option<&str>, dirty: DirtyState, cols: usize) -> String {
    let mut plain = format!(" {APP_NAME}: {}", file_name.unwrap_or(SCRATCH_NAME));
    if dirty.is_dirty() {
        plain.push_str(DIRTY_MARKER);
    }
    let plain = truncate_with_ellipsis(&plain, cols);

    let mut acc = StyledLine::with_capacity(cols);
    acc.push_str(&plain, Some(SGR_REVERSE));
    acc.pad_to(cols, Some(SGR_REVERSE));
    acc.render()
}

/// `Ln r, Col c` + validation indicator + transient message (or the active prompt).
#[must_use]
pub fn status_bar(
    cursor: Pos,
    status: &StatusText,
    prompt: Option<&str>,
    cols: usize,
    error_cap: usize,
) -> String {
    let mut acc = StyledLine::with_capacity(cols);
    acc.push_str(&format!(" {cursor}"), None);

    match &status.validation {
        ValidationStatus::NotRun => {}
        ValidationStatus::Valid => {
            acc.push_str("  ", None);
            acc.push_str("OK", Some(FG_OK));
        }
        ValidationStatus::Invalid(message) => {
            acc.push_str("  ", None);
            let message = truncate_with_ellipsis(&printable(message), error_cap);
            acc.push_str(&format!("ERR {message}"), Some(FG_ERROR));
        }
    }

    if let Some(text) = prompt.or(status.message.as_deref()) {
        acc.push_str("  ", None);
        acc.push_str(text, None);
    }

    acc.truncate(cols);
    acc.pad_to(cols, None);
    acc.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn width(text: &str) -> usize { strip_ansi_escapes::strip_str(text).chars().count() }

    fn status_with(validation: ValidationStatus, message: Option<&str>) -> StatusText {
        StatusText {
            validation,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn title_shows_name_and_dirty_marker() {
        let bar = title_bar(Some("main.ql"), DirtyState::Dirty, 40);
        let plain = strip_ansi_escapes::strip_str(&bar);
        assert_eq!(plain.trim_end(), " quill: main.ql [+]");
        assert_eq!(width(&bar), 40);

        let bar = title_bar(None, DirtyState::Clean, 40);
        assert_eq!(strip_ansi_escapes::strip_str(&bar).trim_end(), " quill: [scratch]");
    }

    #[test_case(80)]
    #[test_case(20)]
    #[test_case(5)]
    #[test_case(1)]
    fn title_never_exceeds_width(cols: usize) {
        let long = "a_really_long_file_name_that_will_not_fit_anywhere.ql";
        assert_eq!(width(&title_bar(Some(long), DirtyState::Dirty, cols)), cols);
    }

    #[test_case(ValidationStatus::NotRun, None ; "absent error")]
    #[test_case(ValidationStatus::Valid, Some("Saved /tmp/x.ql".to_string()) ; "ok with message")]
    #[test_case(ValidationStatus::Invalid("line 3: unclosed".into()), None ; "short error")]
    #[test_case(
        ValidationStatus::Invalid("line 3: ".to_string() + &"x".repeat(300)),
        Some("m".repeat(200)) ;
        "long error and message"
    )]
    fn status_never_exceeds_width(validation: ValidationStatus, message: Option<String>) {
        let status = status_with(validation, message.as_deref());
        for cols in [1, 10, 30, 45, 80, 200] {
            let bar = status_bar(Pos::new(41, 9999), &status, None, cols, 30);
            assert_eq!(width(&bar), cols, "cols {cols}");
        }
    }

    #[test]
    fn long_error_is_capped_with_ellipsis() {
        let status = status_with(
            ValidationStatus::Invalid("line 12: unexpected token after expression".into()),
            None,
        );
        let bar = status_bar(Pos::new(0, 0), &status, None, 120, 30);
        let plain = strip_ansi_escapes::strip_str(&bar);
        assert_eq!(
            plain.trim_end(),
            " Ln 1, Col 1  ERR line 12: unexpected token aft…"
        );
    }

    #[test]
    fn prompt_replaces_message() {
        let status = status_with(ValidationStatus::Valid, Some("Saved x"));
        let bar = status_bar(Pos::new(2, 1), &status, Some("Go to line: 12"), 80, 30);
        let plain = strip_ansi_escapes::strip_str(&bar);
        assert_eq!(plain.trim_end(), " Ln 2, Col 3  OK  Go to line: 12");
    }

    #[test]
    fn newlines_in_messages_are_flattened() {
        let status = status_with(ValidationStatus::Invalid("a\nb".into()), None);
        let bar = status_bar(Pos::new(0, 0), &status, None, 80, 30);
        assert!(!bar.contains('\n'));
        assert_eq!(strip_ansi_escapes::strip_str(&bar).trim_end(), " Ln 1, Col 1  ERR a b");
    }

    #[test]
    fn escape_in_message_is_not_emitted() {
        let status = status_with(ValidationStatus::Valid, Some("bad \x1b[2J name"));
        let bar = status_bar(Pos::new(0, 0), &status, None, 80, 30);
        assert!(!bar.contains("\x1b[2J"));
        assert_eq!(width(&bar), 80);
    }
}
