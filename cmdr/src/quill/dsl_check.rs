// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structural check of quill source: brackets must balance and string literals must
//! close on the line they open. Runs on the blocking pool via the editor's validator, so
//! it only needs to be correct, not incremental.

use quill_tui::{TokenKind, tokenize_line};

/// `(true, "")` when the source is well formed, otherwise `(false, "line N: ...")` for
/// the first problem found (1 based line number).
#[must_use]
pub fn validate_source(content: &str) -> (bool, String) {
    match find_problem(content) {
        None => (true, String::new()),
        Some(problem) => (false, problem),
    }
}

fn find_problem(content: &str) -> Option<String> {
    // (bracket, line number) of every unclosed opener.
    let mut open: Vec<(char, usize)> = vec![];

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let chars: Vec<char> = line.chars().collect();

        for token in tokenize_line(&chars) {
            let text = &chars[token.span.clone()];
            match token.kind {
                TokenKind::Str if !is_terminated_string(text) => {
                    return Some(format!("line {line_number}: unterminated string"));
                }
                TokenKind::Punct => {
                    let ch = text[0];
                    if let Some(close) = closer_for(ch) {
                        open.push((close, line_number));
                    } else if is_closer(ch) {
                        match open.pop() {
                            Some((expected, _)) if expected == ch => {}
                            Some((expected, _)) => {
                                return Some(format!(
                                    "line {line_number}: expected '{expected}' but found '{ch}'"
                                ));
                            }
                            None => {
                                return Some(format!("line {line_number}: unexpected '{ch}'"));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    open.pop()
        .map(|(close, line_number)| format!("line {line_number}: missing '{close}'"))
}

fn closer_for(ch: char) -> Option<char> {
    match ch {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

fn is_closer(ch: char) -> bool { matches!(ch, '}' | ')' | ']') }

/// A string token is closed when it ends in a quote that is not escaped.
fn is_terminated_string(text: &[char]) -> bool {
    if text.len() < 2 || text[text.len() - 1] != '"' {
        return false;
    }
    let backslashes = text[1..text.len() - 1]
        .iter()
        .rev()
        .take_while(|it| **it == '\\')
        .count();
    backslashes % 2 == 0
}
