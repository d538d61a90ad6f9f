// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

pub const SGR_BOLD: &str = "\x1b[1m";
pub const SGR_DIM: &str = "\x1b[2m";
pub const SGR_REVERSE: &str = "\x1b[7m";

// 256-color foregrounds used by the syntax colorizer and the chrome.
pub const FG_KEYWORD: &str = "\x1b[38;5;170m";
pub const FG_IDENT: &str = "\x1b[38;5;252m";
pub const FG_NUMBER: &str = "\x1b[38;5;179m";
pub const FG_STRING: &str = "\x1b[38;5;114m";
pub const FG_COMMENT: &str = "\x1b[38;5;244m";
pub const FG_PUNCT: &str = "\x1b[38;5;110m";
pub const FG_GUTTER: &str = "\x1b[38;5;240m";
pub const FG_ANNOTATION: &str = "\x1b[38;5;67m";
pub const FG_OK: &str = "\x1b[38;5;71m";
pub const FG_ERROR: &str = "\x1b[38;5;203m";

/// Popup background.
pub const BG_POPUP: &str = "\x1b[48;5;236m";
