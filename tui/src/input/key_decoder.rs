// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoder from raw bytes to [`KeyEvent`]s.
//!
//! Three kinds of ambiguity are resolved here:
//!
//! 1. **UTF-8**: a lead byte `>= 0x80` announces a 2, 3 or 4 byte code point. If the
//!    continuation bytes don't arrive in time, or don't decode, the lead byte itself is
//!    delivered as a code point.
//! 2. **Escape sequences**: `ESC [` starts a CSI sequence, `ESC O` an SS3 sequence. Any
//!    other byte after `ESC` (or nothing at all within the lookahead window) means the
//!    user pressed Escape. Unknown CSI payloads are drained up to their final byte in
//!    `0x40..=0x7E` and dropped, which re-synchronizes the stream.
//! 3. **CR / LF**: `CR` looks ahead once. A following `LF` is swallowed (so `CR LF` is
//!    one Enter), anything else goes into the [`ByteSource`] pushback slot. A bare `LF`
//!    is also Enter.
//!
//! Every lookahead is bounded by the configured timeout, so a lone Escape keypress
//! resolves within tens of milliseconds instead of waiting for a CSI byte that is never
//! coming.
//!
//! | Bytes                          | Event                   |
//! | ------------------------------ | ----------------------- |
//! | `ESC [ A` .. `ESC [ D`         | Up, Down, Right, Left   |
//! | `ESC [ H`, `ESC [ F`           | Home, End               |
//! | `ESC [ 1 ~` / `7 ~`            | Home                    |
//! | `ESC [ 3 ~`                    | Delete                  |
//! | `ESC [ 4 ~` / `8 ~`            | End                     |
//! | `ESC [ 5 ~`, `ESC [ 6 ~`       | PageUp, PageDown        |
//! | `ESC O A` .. `ESC O D`, `H`, `F` | arrows, Home, End     |
//! | `0x7F`, `0x08`                 | Backspace               |
//! | `0x09`                         | Tab                     |
//! | `0x00`                         | `Ctrl+Space`            |
//! | `0x01` .. `0x1A`               | `Ctrl+a` .. `Ctrl+z`    |

use super::{ByteRead, ByteSource, KeyEvent, NamedKey, StdinReceiver};
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR,
            ANSI_PARAM_SEPARATOR, ANSI_SS3_O, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, ASCII_BS, ASCII_CR, ASCII_DEL,
            ASCII_LF, ASCII_NUL, ASCII_TAB, CSI_FINAL_BYTE_MAX, CSI_FINAL_BYTE_MIN,
            CTRL_CHORD_OFFSET, DEBUG_QUILL_SHOW_INPUT, SPECIAL_DELETE_CODE,
            SPECIAL_END_ALT_CODE, SPECIAL_END_CODE, SPECIAL_END_FINAL,
            SPECIAL_HOME_ALT_CODE, SPECIAL_HOME_CODE, SPECIAL_HOME_FINAL,
            SPECIAL_PAGE_DOWN_CODE, SPECIAL_PAGE_UP_CODE,
            UTF8_CONTINUATION_MASK, UTF8_CONTINUATION_PATTERN};
use smallvec::SmallVec;
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle};

/// Longest CSI payload that is kept for interpretation. Longer payloads are still
/// drained to their final byte, but can only ever decode to "no event".
const MAX_CSI_PAYLOAD: usize = 16;

type CsiPayload = SmallVec<[u8; 8]>;

/// Result of decoding one unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    Key(KeyEvent),
    /// Bytes were consumed but mean nothing to the editor.
    NoEvent,
    Closed,
}

/// Owns the [`ByteSource`] and with it all partially decoded state.
#[derive(Debug)]
pub struct KeyDecoder {
    source: ByteSource,
    lookahead: Duration,
}

impl KeyDecoder {
    #[must_use]
    pub fn new(source: ByteSource, lookahead: Duration) -> Self {
        Self { source, lookahead }
    }

    /// Next key, skipping bytes that decode to nothing. [`None`] once input is closed.
    pub async fn next_key(&mut self) -> Option<KeyEvent> {
        loop {
            match self.decode_one().await {
                DecodeStep::Key(key) => {
                    DEBUG_QUILL_SHOW_INPUT.then(|| {
                        tracing::debug!(message = "key-decoder: key", key = %key);
                    });
                    return Some(key);
                }
                DecodeStep::NoEvent => {}
                DecodeStep::Closed => return None,
            }
        }
    }

    /// Consume the bytes of exactly one keypress.
    pub async fn decode_one(&mut self) -> DecodeStep {
        let byte = match self.source.read_byte().await {
            ByteRead::Byte(byte) => byte,
            ByteRead::TimedOut => return DecodeStep::NoEvent,
            ByteRead::Closed => return DecodeStep::Closed,
        };

        match byte {
            ANSI_ESC => self.decode_escape().await,
            ASCII_CR => {
                self.swallow_lf_after_cr().await;
                DecodeStep::Key(NamedKey::Enter.into())
            }
            ASCII_LF => DecodeStep::Key(NamedKey::Enter.into()),
            ASCII_TAB => DecodeStep::Key(NamedKey::Tab.into()),
            ASCII_DEL | ASCII_BS => DecodeStep::Key(NamedKey::Backspace.into()),
            ASCII_NUL => DecodeStep::Key(KeyEvent::Ctrl(' ')),
            0x01..=0x1A => {
                DecodeStep::Key(KeyEvent::Ctrl(char::from(byte + CTRL_CHORD_OFFSET)))
            }
            // FS, GS, RS, US: no binding.
            0x1C..=0x1F => DecodeStep::NoEvent,
            0x20..=0x7E => DecodeStep::Key(KeyEvent::Char(char::from(byte))),
            _ => DecodeStep::Key(KeyEvent::Char(self.decode_utf8(byte).await)),
        }
    }

    async fn swallow_lf_after_cr(&mut self) {
        match self.source.read_byte_timeout(self.lookahead).await {
            ByteRead::Byte(ASCII_LF) => {}
            ByteRead::Byte(other) => self.source.push_back(other),
            ByteRead::TimedOut | ByteRead::Closed => {}
        }
    }

    async fn decode_escape(&mut self) -> DecodeStep {
        match self.source.read_byte_timeout(self.lookahead).await {
            ByteRead::Byte(ANSI_CSI_BRACKET) => self.decode_csi().await,
            ByteRead::Byte(ANSI_SS3_O) => self.decode_ss3().await,
            ByteRead::Byte(other) => {
                self.source.push_back(other);
                DecodeStep::Key(NamedKey::Escape.into())
            }
            ByteRead::TimedOut | ByteRead::Closed => {
                DecodeStep::Key(NamedKey::Escape.into())
            }
        }
    }

    async fn decode_csi(&mut self) -> DecodeStep {
        let mut payload = CsiPayload::new();
        loop {
            match self.source.read_byte_timeout(self.lookahead).await {
                ByteRead::Byte(byte) if is_csi_final(byte) => {
                    return csi_to_step(&payload, byte);
                }
                ByteRead::Byte(byte) => {
                    if payload.len() < MAX_CSI_PAYLOAD {
                        payload.push(byte);
                    }
                }
                // `ESC [` and then silence: the user typed Escape then `[`.
                ByteRead::TimedOut if payload.is_empty() => {
                    self.source.push_back(ANSI_CSI_BRACKET);
                    return DecodeStep::Key(NamedKey::Escape.into());
                }
                ByteRead::TimedOut => {
                    DEBUG_QUILL_SHOW_INPUT.then(|| {
                        tracing::debug!(
                            message = "key-decoder: dropping unterminated CSI",
                            payload = ?payload
                        );
                    });
                    return DecodeStep::NoEvent;
                }
                ByteRead::Closed => return DecodeStep::Closed,
            }
        }
    }

    async fn decode_ss3(&mut self) -> DecodeStep {
        match self.source.read_byte_timeout(self.lookahead).await {
            ByteRead::Byte(byte) => match final_to_key(byte) {
                Some(key) => DecodeStep::Key(key.into()),
                None => DecodeStep::NoEvent,
            },
            // `ESC O` and then silence: Escape followed by a literal `O`.
            ByteRead::TimedOut => {
                self.source.push_back(ANSI_SS3_O);
                DecodeStep::Key(NamedKey::Escape.into())
            }
            ByteRead::Closed => DecodeStep::Closed,
        }
    }

    /// Decode the rest of a multi byte code point that starts with `lead`.
    async fn decode_utf8(&mut self, lead: u8) -> char {
        let fallback = char::from(lead);
        let len = utf8_sequence_len(lead);
        if len < 2 {
            return fallback;
        }

        let mut bytes: SmallVec<[u8; 4]> = SmallVec::new();
        bytes.push(lead);
        while bytes.len() < len {
            match self.source.read_byte_timeout(self.lookahead).await {
                ByteRead::Byte(byte)
                    if byte & UTF8_CONTINUATION_MASK == UTF8_CONTINUATION_PATTERN =>
                {
                    bytes.push(byte);
                }
                ByteRead::Byte(other) => {
                    self.source.push_back(other);
                    return fallback;
                }
                ByteRead::TimedOut | ByteRead::Closed => return fallback,
            }
        }

        std::str::from_utf8(&bytes)
            .ok()
            .and_then(|it| it.chars().next())
            .unwrap_or(fallback)
    }
}

/// Byte length of the UTF-8 sequence announced by `lead`, or 1 if it is not a valid
/// lead byte.
#[must_use]
pub fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

fn is_csi_final(byte: u8) -> bool { (CSI_FINAL_BYTE_MIN..=CSI_FINAL_BYTE_MAX).contains(&byte) }

/// Final byte shared by CSI and SS3 cursor key encodings.
fn final_to_key(byte: u8) -> Option<NamedKey> {
    match byte {
        ARROW_UP_FINAL => Some(NamedKey::Up),
        ARROW_DOWN_FINAL => Some(NamedKey::Down),
        ARROW_RIGHT_FINAL => Some(NamedKey::Right),
        ARROW_LEFT_FINAL => Some(NamedKey::Left),
        SPECIAL_HOME_FINAL => Some(NamedKey::Home),
        SPECIAL_END_FINAL => Some(NamedKey::End),
        _ => None,
    }
}

fn csi_to_step(payload: &[u8], final_byte: u8) -> DecodeStep {
    let key = if final_byte == ANSI_FUNCTION_KEY_TERMINATOR {
        first_param(payload).and_then(tilde_code_to_key)
    } else {
        // Modifier parameters (eg: `ESC [ 1 ; 5 A` for Ctrl+Up) are ignored.
        final_to_key(final_byte)
    };
    match key {
        Some(key) => DecodeStep::Key(key.into()),
        None => DecodeStep::NoEvent,
    }
}

fn first_param(payload: &[u8]) -> Option<u16> {
    let digits = payload
        .split(|&it| it == ANSI_PARAM_SEPARATOR)
        .next()
        .filter(|it| !it.is_empty())?;
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn tilde_code_to_key(code: u16) -> Option<NamedKey> {
    match code {
        SPECIAL_HOME_CODE | SPECIAL_HOME_ALT_CODE => Some(NamedKey::Home),
        SPECIAL_DELETE_CODE => Some(NamedKey::Delete),
        SPECIAL_END_CODE | SPECIAL_END_ALT_CODE => Some(NamedKey::End),
        SPECIAL_PAGE_UP_CODE => Some(NamedKey::PageUp),
        SPECIAL_PAGE_DOWN_CODE => Some(NamedKey::PageDown),
        // Insert and function keys have no binding.
        _ => None,
    }
}

/// Spawn the decoder task. It is the single consumer of the byte queue and the single
/// producer of the returned key channel, so keys arrive in the order they were typed.
///
/// The task ends when input closes or when the key receiver is dropped.
#[must_use]
pub fn spawn_key_decoder(
    byte_rx: StdinReceiver,
    lookahead: Duration,
    key_capacity: usize,
) -> (mpsc::Receiver<KeyEvent>, JoinHandle<()>) {
    let (key_tx, key_rx) = mpsc::channel(key_capacity.max(1));
    let mut decoder = KeyDecoder::new(ByteSource::new(byte_rx), lookahead);

    let handle = tokio::spawn(async move {
        while let Some(key) = decoder.next_key().await {
            if key_tx.send(key).await.is_err() {
                tracing::debug!(message = "key-decoder: key receiver dropped, exiting");
                return;
            }
        }
        tracing::debug!(message = "key-decoder: input closed, exiting");
    });

    (key_rx, handle)
}

#[cfg(test)]
mod tests_decoding {
    use super::*;
    use crate::StdinReadResult;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const LOOKAHEAD: Duration = Duration::from_millis(20);

    /// Feed `bytes` as one chunk followed by EOF and collect every key.
    async fn decode_all(bytes: &[u8]) -> Vec<KeyEvent> {
        decode_chunks(&[bytes]).await
    }

    async fn decode_chunks(chunks: &[&[u8]]) -> Vec<KeyEvent> {
        let (tx, rx) = mpsc::channel(16);
        for chunk in chunks {
            tx.send(StdinReadResult::Data(chunk.to_vec())).await.unwrap();
        }
        tx.send(StdinReadResult::Eof).await.unwrap();
        let mut decoder = KeyDecoder::new(ByteSource::new(rx), LOOKAHEAD);
        let mut keys = vec![];
        while let Some(key) = decoder.next_key().await {
            keys.push(key);
        }
        keys
    }

    fn enter() -> KeyEvent { NamedKey::Enter.into() }

    #[tokio::test]
    async fn cr_lf_is_one_enter_and_next_byte_survives() {
        assert_eq!(decode_all(b"\r\na").await, vec![enter(), KeyEvent::Char('a')]);
    }

    #[tokio::test]
    async fn cr_then_other_byte_is_pushed_back() {
        assert_eq!(decode_all(b"\rb").await, vec![enter(), KeyEvent::Char('b')]);
    }

    #[tokio::test]
    async fn cr_then_escape_sequence_is_pushed_back() {
        assert_eq!(decode_all(b"\r\x1b[A").await, vec![
            enter(),
            NamedKey::Up.into()
        ]);
    }

    #[tokio::test]
    async fn bare_lf_and_double_cr() {
        assert_eq!(decode_all(b"\n").await, vec![enter()]);
        assert_eq!(decode_all(b"\r\r").await, vec![enter(), enter()]);
    }

    #[tokio::test]
    async fn cr_at_end_of_input_is_enter() {
        assert_eq!(decode_all(b"\r").await, vec![enter()]);
    }

    #[tokio::test]
    async fn cr_and_lf_split_across_chunks() {
        assert_eq!(decode_chunks(&[b"\r", b"\nx"]).await, vec![
            enter(),
            KeyEvent::Char('x')
        ]);
    }

    #[test_case(b"\x1b[A", NamedKey::Up)]
    #[test_case(b"\x1b[B", NamedKey::Down)]
    #[test_case(b"\x1b[C", NamedKey::Right)]
    #[test_case(b"\x1b[D", NamedKey::Left)]
    #[test_case(b"\x1b[H", NamedKey::Home)]
    #[test_case(b"\x1b[F", NamedKey::End)]
    #[test_case(b"\x1b[1~", NamedKey::Home)]
    #[test_case(b"\x1b[3~", NamedKey::Delete)]
    #[test_case(b"\x1b[4~", NamedKey::End)]
    #[test_case(b"\x1b[5~", NamedKey::PageUp)]
    #[test_case(b"\x1b[6~", NamedKey::PageDown)]
    #[test_case(b"\x1b[7~", NamedKey::Home)]
    #[test_case(b"\x1b[8~", NamedKey::End)]
    #[test_case(b"\x1b[1;5A", NamedKey::Up)]
    #[test_case(b"\x1bOA", NamedKey::Up)]
    #[test_case(b"\x1bOD", NamedKey::Left)]
    #[test_case(b"\x1bOH", NamedKey::Home)]
    #[test_case(b"\x1bOF", NamedKey::End)]
    #[tokio::test]
    async fn escape_sequences(bytes: &[u8], expected: NamedKey) {
        assert_eq!(decode_all(bytes).await, vec![expected.into()]);
    }

    #[tokio::test]
    async fn unknown_csi_is_drained_and_stream_resyncs() {
        // F5 (`15~`), Insert (`2~`), and a mouse report, each followed by a real key.
        assert_eq!(
            decode_all(b"\x1b[15~a\x1b[2~b\x1b[<0;10;5Mc").await,
            vec![KeyEvent::Char('a'), KeyEvent::Char('b'), KeyEvent::Char('c')]
        );
    }

    #[tokio::test]
    async fn overlong_csi_is_drained() {
        let mut bytes = b"\x1b[".to_vec();
        bytes.extend(std::iter::repeat_n(b'9', 40));
        bytes.extend(b"~z");
        assert_eq!(decode_all(&bytes).await, vec![KeyEvent::Char('z')]);
    }

    #[tokio::test]
    async fn lone_escape_resolves() {
        assert_eq!(decode_all(b"\x1b").await, vec![NamedKey::Escape.into()]);
    }

    #[tokio::test]
    async fn escape_then_letter_pushes_letter_back() {
        assert_eq!(decode_all(b"\x1bx").await, vec![
            NamedKey::Escape.into(),
            KeyEvent::Char('x')
        ]);
    }

    #[tokio::test]
    async fn double_escape_is_two_escapes() {
        assert_eq!(decode_all(b"\x1b\x1b").await, vec![
            NamedKey::Escape.into(),
            NamedKey::Escape.into()
        ]);
    }

    #[tokio::test]
    async fn control_bytes() {
        assert_eq!(decode_all(b"\x01\x13\x1a\x00\t\x7f\x08").await, vec![
            KeyEvent::Ctrl('a'),
            KeyEvent::Ctrl('s'),
            KeyEvent::Ctrl('z'),
            KeyEvent::Ctrl(' '),
            NamedKey::Tab.into(),
            NamedKey::Backspace.into(),
            NamedKey::Backspace.into(),
        ]);
    }

    #[tokio::test]
    async fn utf8_code_points() {
        assert_eq!(decode_all("é→😀".as_bytes()).await, vec![
            KeyEvent::Char('é'),
            KeyEvent::Char('→'),
            KeyEvent::Char('😀'),
        ]);
    }

    #[tokio::test]
    async fn utf8_split_across_chunks() {
        let bytes = "→".as_bytes();
        assert_eq!(decode_chunks(&[&bytes[..1], &bytes[1..]]).await, vec![
            KeyEvent::Char('→')
        ]);
    }

    #[tokio::test]
    async fn truncated_utf8_falls_back_to_raw_byte() {
        // Lead byte of a 3 byte sequence followed by an ASCII letter.
        assert_eq!(decode_all(&[0xE2, b'a']).await, vec![
            KeyEvent::Char(char::from(0xE2)),
            KeyEvent::Char('a'),
        ]);
    }

    #[tokio::test]
    async fn stray_continuation_byte_is_raw_code_point() {
        assert_eq!(decode_all(&[0x80]).await, vec![KeyEvent::Char(char::from(0x80))]);
    }
}
