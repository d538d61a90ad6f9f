// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TokenKind, tokenize_line};
use crate::TextBuffer;

/// Label used for a `{` with no identifier before it on its line.
pub const ANONYMOUS_BLOCK_LABEL: &str = "{}";

/// Stack of open blocks, used for the right hand annotation column.
///
/// Every `{` outside strings and comments opens a block labelled by the last identifier
/// before it on the same line, and every `}` closes the innermost open block. The
/// annotation for a row is the innermost block that is open when the row starts, so the
/// header line of a block shows its parent and the closing `}` still shows the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockContext {
    stack: Vec<String>,
}

impl BlockContext {
    /// Context at the start of row `top`, by scanning every row above it.
    #[must_use]
    pub fn establish(buffer: &TextBuffer, top: usize) -> Self {
        let mut context = Self::default();
        for row in 0..top.min(buffer.line_count()) {
            context.scan_line(buffer.line_chars(row));
        }
        context
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> { self.stack.last().map(String::as_str) }

    #[must_use]
    pub fn depth(&self) -> usize { self.stack.len() }

    /// Advance past one line.
    pub fn scan_line(&mut self, line: &[char]) {
        let mut last_ident: Option<String> = None;
        for token in tokenize_line(line) {
            match token.kind {
                TokenKind::Ident => last_ident = Some(line[token.span].iter().collect()),
                TokenKind::Punct if line[token.span.start] == '{' => {
                    let label = last_ident
                        .clone()
                        .unwrap_or_else(|| ANONYMOUS_BLOCK_LABEL.to_string());
                    self.stack.push(label);
                }
                TokenKind::Punct if line[token.span.start] == '}' => {
                    self.stack.pop();
                }
                _ => {}
            }
        }
    }
}
