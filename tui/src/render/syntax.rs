// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single line lexer for syntax coloring.
//!
//! The set of token kinds is closed, so each kind maps straight to a color in
//! [`TokenKind::sgr`]. The lexer has no state across lines: a string that is not
//! closed runs to the end of its line, and only `//` line comments exist.

use crate::{FG_COMMENT, FG_IDENT, FG_KEYWORD, FG_NUMBER, FG_PUNCT, FG_STRING,
            KEYWORDS, StyledLine};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TokenKind {
    Keyword,
    Ident,
    Number,
    Str,
    Comment,
    Punct,
    Whitespace,
}

impl TokenKind {
    /// Color escape for this kind, or [`None`] for uncolored whitespace.
    #[must_use]
    pub fn sgr(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some(FG_KEYWORD),
            TokenKind::Ident => Some(FG_IDENT),
            TokenKind::Number => Some(FG_NUMBER),
            TokenKind::Str => Some(FG_STRING),
            TokenKind::Comment => Some(FG_COMMENT),
            TokenKind::Punct => Some(FG_PUNCT),
            TokenKind::Whitespace => None,
        }
    }
}

/// A token, as a range of code point indices into its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

fn is_ident_start(ch: char) -> bool { ch.is_alphabetic() || ch == '_' }

fn is_ident_continue(ch: char) -> bool { ch.is_alphanumeric() || ch == '_' }

#[must_use]
pub fn is_keyword(word: &str) -> bool { KEYWORDS.contains(&word) }

#[must_use]
pub fn tokenize_line(line: &[char]) -> Vec<Token> {
    let mut tokens = vec![];
    let mut start = 0;

    while start < line.len() {
        let ch = line[start];
        let scan_while = |pred: fn(char) -> bool| {
            let mut end = start + 1;
            while end < line.len() && pred(line[end]) {
                end += 1;
            }
            end
        };

        let (kind, end) = if ch == '/' && line.get(start + 1) == Some(&'/') {
            (TokenKind::Comment, line.len())
        } else if ch == '"' {
            (TokenKind::Str, string_end(line, start))
        } else if ch.is_whitespace() {
            (TokenKind::Whitespace, scan_while(char::is_whitespace))
        } else if ch.is_ascii_digit() {
            (TokenKind::Number, scan_while(|it| it.is_alphanumeric() || it == '.' || it == '_'))
        } else if is_ident_start(ch) {
            let end = scan_while(is_ident_continue);
            let word: String = line[start..end].iter().collect();
            let kind = if is_keyword(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Ident
            };
            (kind, end)
        } else {
            (TokenKind::Punct, start + 1)
        };

        tokens.push(Token {
            kind,
            span: start..end,
        });
        start = end;
    }

    tokens
}

/// Index just past the closing quote, honoring `\"` escapes. Runs to the end of the
/// line when the string is not terminated.
fn string_end(line: &[char], open: usize) -> usize {
    let mut index = open + 1;
    while index < line.len() {
        match line[index] {
            '\\' => index += 2,
            '"' => return index + 1,
            _ => index += 1,
        }
    }
    line.len()
}

/// One styled cell per code point of `line`, colored by token kind.
#[must_use]
pub fn colorize_line(line: &[char]) -> StyledLine {
    let mut acc = StyledLine::with_capacity(line.len());
    for token in tokenize_line(line) {
        acc.push_chars(&line[token.span], token.kind.sgr());
    }
    acc
}
