// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives [`Editor::run`] end to end: keys go in through a channel exactly as the
//! decoder would send them, frames come out into a `Vec<u8>`.

use pretty_assertions::assert_eq;
use quill_tui::{Collaborators, DirtyState, Editor, EditorChannels, EditorConfig, KeyEvent,
                NamedKey, NoPersist, PersistError, QUIT_WARNING, StdMutex, TermSize,
                ValidationStatus};
use std::{sync::Arc, time::Duration};
use tokio::sync::{mpsc, watch};

const SIZE: TermSize = TermSize { cols: 80, rows: 12 };

struct Harness {
    editor: Editor<Vec<u8>>,
    channels: EditorChannels,
    key_tx: mpsc::Sender<KeyEvent>,
    resize_tx: watch::Sender<TermSize>,
    saved: Arc<StdMutex<Vec<String>>>,
}

fn harness(content: &str) -> Harness {
    let saved = Arc::new(StdMutex::new(vec![]));
    let saved_clone = saved.clone();
    let collaborators = Collaborators {
        validate: Arc::new(|content: &str| {
            if content.contains('!') {
                (false, "line 1: unexpected '!'".to_string())
            } else {
                (true, String::new())
            }
        }),
        patterns: Arc::new(|prefix: &str| {
            ["screenHeader", "screenFooter"]
                .iter()
                .filter(|it| it.starts_with(prefix))
                .map(|it| (*it).to_string())
                .collect::<Vec<_>>()
        }),
        persist: Arc::new(move |content: &str| -> Result<(), PersistError> {
            saved_clone.lock().unwrap().push(content.to_string());
            Ok(())
        }),
    };
    let config = EditorConfig {
        validation_debounce: Duration::from_millis(10),
        ..EditorConfig::default()
    };
    let (editor, redraw) = Editor::new(
        content,
        Some("main.ql".into()),
        collaborators,
        &config,
        SIZE,
        vec![],
    );
    let (key_tx, keys) = mpsc::channel(64);
    let (resize_tx, resize) = watch::channel(SIZE);
    Harness {
        editor,
        channels: EditorChannels {
            keys,
            redraw,
            resize,
        },
        key_tx,
        resize_tx,
        saved,
    }
}

async fn send(tx: &mpsc::Sender<KeyEvent>, keys: &[KeyEvent]) {
    for key in keys {
        tx.send(*key).await.unwrap();
    }
}

fn typed(text: &str) -> Vec<KeyEvent> { text.chars().map(KeyEvent::Char).collect() }

fn output_text(editor: &Editor<Vec<u8>>) -> String {
    String::from_utf8_lossy(editor.output()).into_owned()
}

#[tokio::test]
async fn typing_then_closing_input_ends_the_loop() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &typed("let x = 1")).await;
    send(&key_tx, &[NamedKey::Enter.into()]).await;
    drop(key_tx);

    editor.run(channels).await;

    assert_eq!(editor.buffer().content(), "let x = 1\n\n");
    assert_eq!(editor.dirty(), DirtyState::Dirty);
    let output = output_text(&editor);
    assert!(output.contains("main.ql [+]"));
    assert!(output.contains("Ln 2, Col 1"));
}

#[tokio::test]
async fn dirty_quit_warns_then_quits() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &[KeyEvent::Char('a'), KeyEvent::Ctrl('q')]).await;

    let handle = tokio::spawn(async move {
        editor.run(channels).await;
        editor
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished());

    send(&key_tx, &[KeyEvent::Ctrl('q')]).await;
    let editor = handle.await.unwrap();
    assert!(output_text(&editor).contains(QUIT_WARNING));
    assert_eq!(editor.buffer().content(), "a\n");
}

#[tokio::test]
async fn any_key_between_quits_needs_a_fresh_warning() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    // An unbound chord, then a key taken by the completion popup.
    send(&key_tx, &[
        KeyEvent::Char('a'),
        KeyEvent::Ctrl('q'),
        KeyEvent::Ctrl('b'),
        KeyEvent::Ctrl('q'),
        KeyEvent::Char(' '),
        KeyEvent::Char('s'),
        KeyEvent::Ctrl('q'),
        KeyEvent::Ctrl(' '),
        NamedKey::Down.into(),
        KeyEvent::Ctrl('q'),
    ])
    .await;

    let handle = tokio::spawn(async move {
        editor.run(channels).await;
        editor
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished());

    send(&key_tx, &[KeyEvent::Ctrl('q')]).await;
    let editor = handle.await.unwrap();
    assert_eq!(editor.buffer().content(), "a s\n");
}

#[tokio::test]
async fn save_writes_content_and_clears_dirty() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        saved,
        ..
    } = harness("screen Main {}");
    send(&key_tx, &[
        KeyEvent::Ctrl('e'),
        KeyEvent::Char(' '),
        KeyEvent::Ctrl('s'),
        KeyEvent::Ctrl('q'),
    ])
    .await;

    editor.run(channels).await;

    assert_eq!(*saved.lock().unwrap(), vec!["screen Main {} \n".to_string()]);
    assert_eq!(editor.dirty(), DirtyState::Clean);
    assert!(output_text(&editor).contains("Saved main.ql"));
}

#[tokio::test]
async fn completion_merges_pattern_source_and_keywords() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &typed("scr")).await;
    send(&key_tx, &[
        KeyEvent::Ctrl(' '),
        NamedKey::Down.into(),
        NamedKey::Enter.into(),
    ])
    .await;
    drop(key_tx);

    editor.run(channels).await;

    assert_eq!(editor.buffer().line(0), "screenFooter");
    assert!(!editor.completer().is_active());
}

#[tokio::test]
async fn undo_after_completion_removes_one_character() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &typed("sc")).await;
    send(&key_tx, &[
        KeyEvent::Ctrl('n'),
        NamedKey::Tab.into(),
        KeyEvent::Ctrl('z'),
    ])
    .await;
    drop(key_tx);

    editor.run(channels).await;

    assert_eq!(editor.buffer().line(0), "screenHeade");
}

#[tokio::test]
async fn go_to_line_prompt_reads_from_the_key_channel() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("a\nb\nc\nd\ne");
    send(&key_tx, &[
        KeyEvent::Ctrl('g'),
        KeyEvent::Char('4'),
        NamedKey::Enter.into(),
        KeyEvent::Char('x'),
    ])
    .await;
    drop(key_tx);

    editor.run(channels).await;

    assert_eq!(editor.buffer().line(3), "xd");
    assert!(output_text(&editor).contains("Go to line: 4"));
}

#[tokio::test]
async fn menu_runs_the_selected_item() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("abc");
    send(&key_tx, &[
        KeyEvent::Ctrl('e'),
        NamedKey::Backspace.into(),
        NamedKey::Escape.into(),
        NamedKey::Down.into(),
        NamedKey::Down.into(),
        NamedKey::Enter.into(),
    ])
    .await;
    drop(key_tx);

    editor.run(channels).await;

    // Third item is Undo.
    assert_eq!(editor.buffer().content(), "abc\n");
    assert!(output_text(&editor).contains("Commands"));
}

#[tokio::test]
async fn escape_closes_completion_without_opening_the_menu() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &typed("sc")).await;
    send(&key_tx, &[
        KeyEvent::Ctrl('n'),
        NamedKey::Escape.into(),
        KeyEvent::Char('r'),
    ])
    .await;
    drop(key_tx);

    editor.run(channels).await;

    assert_eq!(editor.buffer().line(0), "scr");
    assert!(!output_text(&editor).contains("Commands"));
}

#[tokio::test]
async fn validation_result_reaches_the_status_bar() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        ..
    } = harness("");
    send(&key_tx, &typed("x!")).await;

    let handle = tokio::spawn(async move {
        editor.run(channels).await;
        editor
    });
    tokio::time::sleep(Duration::from_millis(150)).await;
    drop(key_tx);
    let editor = handle.await.unwrap();

    assert_eq!(
        editor.status().validation,
        ValidationStatus::Invalid("line 1: unexpected '!'".into())
    );
    assert!(output_text(&editor).contains("ERR line 1: unexpected '!'"));
}

#[tokio::test]
async fn resize_redraws_with_the_new_size() {
    let Harness {
        mut editor,
        channels,
        key_tx,
        resize_tx,
        ..
    } = harness("abc");
    let handle = tokio::spawn(async move {
        editor.run(channels).await;
        editor
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    resize_tx.send(TermSize { cols: 40, rows: 6 }).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(key_tx);
    let editor = handle.await.unwrap();

    assert_eq!(editor.size(), TermSize { cols: 40, rows: 6 });
}

#[tokio::test]
async fn scratch_buffer_save_fails_into_status() {
    let Harness {
        channels, key_tx, ..
    } = harness("");
    let collaborators = Collaborators {
        validate: Arc::new(|_: &str| (true, String::new())),
        patterns: Arc::new(quill_tui::NoPatterns),
        persist: Arc::new(NoPersist),
    };
    let (mut editor, redraw) =
        Editor::new("", None, collaborators, &EditorConfig::default(), SIZE, vec![]);
    send(&key_tx, &[KeyEvent::Char('x'), KeyEvent::Ctrl('s')]).await;
    drop(key_tx);

    editor
        .run(EditorChannels {
            redraw,
            ..channels
        })
        .await;

    let output = output_text(&editor);
    assert!(output.contains("[scratch]"));
    assert!(output.contains("Save failed: no file path"));
}
