// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 input byte constants.
//!
//! # Keyboard Sequences
//!
//! ## Arrow Keys (CSI A/B/C/D, or SS3 A/B/C/D in application mode)
//! - Up: `ESC[A` / `ESC O A`
//! - Down: `ESC[B` / `ESC O B`
//! - Right: `ESC[C` / `ESC O C`
//! - Left: `ESC[D` / `ESC O D`
//!
//! ## Special Keys
//! - Home: `CSI H`, `SS3 H`, `CSI 1~`, `CSI 7~`
//! - End: `CSI F`, `SS3 F`, `CSI 4~`, `CSI 8~`
//! - Delete: `CSI 3~`
//! - Page Up: `CSI 5~`
//! - Page Down: `CSI 6~`

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte: Second byte of SS3 sequences (0x4F)
pub const ANSI_SS3_O: u8 = b'O';

/// Parameter separator byte: `;` (59 in decimal, 0x3B in hex)
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

/// Inclusive range of CSI final bytes. Anything in here ends a CSI sequence.
pub const CSI_FINAL_BYTE_MIN: u8 = 0x40;
pub const CSI_FINAL_BYTE_MAX: u8 = 0x7E;

// ==================== Arrow Keys ====================

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Special Keys (CSI H/F) ====================

pub const SPECIAL_HOME_FINAL: u8 = b'H';
pub const SPECIAL_END_FINAL: u8 = b'F';

// ==================== Special Keys (CSI n~) ====================

pub const SPECIAL_HOME_CODE: u16 = 1;
pub const SPECIAL_DELETE_CODE: u16 = 3;
pub const SPECIAL_END_CODE: u16 = 4;
pub const SPECIAL_PAGE_UP_CODE: u16 = 5;
pub const SPECIAL_PAGE_DOWN_CODE: u16 = 6;
/// rxvt alternative.
pub const SPECIAL_HOME_ALT_CODE: u16 = 7;
/// rxvt alternative.
pub const SPECIAL_END_ALT_CODE: u16 = 8;

// ==================== Control Bytes ====================

/// Ctrl+Space / NUL.
pub const ASCII_NUL: u8 = 0x00;

/// Backspace on some terminals (and Ctrl+H).
pub const ASCII_BS: u8 = 0x08;

/// Horizontal tab.
pub const ASCII_TAB: u8 = 0x09;

/// Line feed. Enter on terminals that translate, or the tail of CR+LF.
pub const ASCII_LF: u8 = 0x0A;

/// Carriage return. What Enter sends in raw mode.
pub const ASCII_CR: u8 = 0x0D;

/// Historical quirk: the Backspace key sends DEL (0x7F), not BS (0x08).
pub const ASCII_DEL: u8 = 0x7F;

/// Control chords `Ctrl+A` .. `Ctrl+Z` arrive as `0x01` .. `0x1A`.
pub const CTRL_CHORD_OFFSET: u8 = 0x60;

// ==================== UTF-8 ====================

/// Continuation bytes look like `10xxxxxx`.
pub const UTF8_CONTINUATION_MASK: u8 = 0b1100_0000;
pub const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;
