// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// External supplier of completion candidates (eg: a snippet registry).
///
/// Called on the editor loop, so implementations should be quick and must not block.
/// Any `Fn(&str) -> Vec<String>` closure works.
pub trait PatternSource: Send + Sync {
    /// Candidates for `prefix`, best first.
    fn autocomplete(&self, prefix: &str) -> Vec<String>;
}

impl<F> PatternSource for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn autocomplete(&self, prefix: &str) -> Vec<String> { self(prefix) }
}

/// A source with no patterns, so only keywords are offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPatterns;

impl PatternSource for NoPatterns {
    fn autocomplete(&self, _prefix: &str) -> Vec<String> { vec![] }
}
