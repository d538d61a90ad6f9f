// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Reserved words of the DSL. Offered by the completer and colored by the highlighter.
pub const KEYWORDS: &[&str] = &[
    "screen", "component", "layout", "style", "state", "prop", "let", "fn", "if",
    "else", "for", "in", "on", "emit", "import", "export", "return", "true", "false",
    "null",
];
