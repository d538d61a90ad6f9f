// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use quill_tui::PatternSource;

/// Snippets for the common quill constructs. Keywords on their own are added by the
/// completer, so these are the multi token shapes.
pub const BUILTIN_PATTERNS: &[&str] = &[
    "screen Main {",
    "component Button {",
    "component Card {",
    "layout column {",
    "layout row {",
    "layout stack {",
    "style {",
    "state count: Int = 0",
    "state text: String = \"\"",
    "prop label: String",
    "on click {",
    "on change {",
    "emit submit",
    "import \"components\"",
    "export component",
    "for item in items {",
    "if visible {",
];

/// Prefix filtered snippet list, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRegistry {
    patterns: Vec<String>,
}

impl Default for PatternRegistry {
    fn default() -> Self { Self::new(BUILTIN_PATTERNS.iter().map(|it| (*it).to_string())) }
}

impl PatternRegistry {
    pub fn new(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    pub fn register(&mut self, pattern: impl Into<String>) { self.patterns.push(pattern.into()); }

    #[must_use]
    pub fn len(&self) -> usize { self.patterns.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }
}

impl PatternSource for PatternRegistry {
    /// An empty prefix matches nothing, so the popup only lists keywords.
    fn autocomplete(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return vec![];
        }
        self.patterns
            .iter()
            .filter(|it| it.starts_with(prefix) && it.as_str() != prefix)
            .cloned()
            .collect()
    }
}
