//! Tests for focus changes and draft editing.

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use super::*;

fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
    bubbletea_rs::event::KeyMsg {
        key,
        modifiers: KeyModifiers::empty(),
    }
}

#[fixture]
fn focused_app() -> BoardApp {
    let mut app = BoardApp::empty();
    app.handle_message(&AppMsg::FocusDraft);
    app
}

#[rstest]
fn typed_keys_edit_draft_when_focused(mut focused_app: BoardApp) {
    for key in [
        KeyCode::Char('h'),
        KeyCode::Char('i'),
        KeyCode::Char('!'),
        KeyCode::Backspace,
    ] {
        focused_app.update(Box::new(key_msg(key)));
    }

    assert_eq!(focused_app.draft_text(), "hi");
}

#[test]
fn typed_keys_do_not_edit_draft_with_list_focus() {
    let mut app = BoardApp::empty();

    app.update(Box::new(key_msg(KeyCode::Char('j'))));

    assert_eq!(app.draft_text(), "");
}

#[rstest]
fn command_letters_are_typed_while_drafting(mut focused_app: BoardApp) {
    let cmd = focused_app.update(Box::new(key_msg(KeyCode::Char('q'))));

    assert!(cmd.is_none(), "q should not quit while drafting");
    assert_eq!(focused_app.draft_text(), "q");
}

#[rstest]
#[case::empty(0)]
#[case::one(1)]
#[case::at_cap(150)]
fn draft_changes_within_cap_are_accepted_exactly(#[case] length: usize) {
    let mut app = BoardApp::empty();
    let value = "字".repeat(length);

    app.handle_message(&AppMsg::DraftChanged(value.clone()));

    assert_eq!(app.draft_text(), value);
}

#[test]
fn draft_change_over_cap_leaves_draft_unchanged() {
    let mut app = BoardApp::empty();
    app.handle_message(&AppMsg::DraftChanged("original".to_owned()));

    app.handle_message(&AppMsg::DraftChanged("a".repeat(151)));

    assert_eq!(app.draft_text(), "original");
}

#[test]
fn typing_at_cap_is_rejected() {
    let mut app = BoardApp::new("tester", 3);
    app.handle_message(&AppMsg::DraftChanged("abc".to_owned()));

    app.handle_message(&AppMsg::DraftInsertChar('d'));

    assert_eq!(app.draft_text(), "abc");
}

#[rstest]
#[case::escape(KeyCode::Esc)]
#[case::tab(KeyCode::Tab)]
fn leaving_the_input_returns_focus_to_list(
    mut focused_app: BoardApp,
    #[case] key: KeyCode,
) {
    focused_app.update(Box::new(key_msg(key)));

    assert_eq!(focused_app.focus(), InputFocus::List);
}

#[test]
fn focusing_with_i_key_clears_post_error() {
    let mut app = BoardApp::empty();
    app.post_error = Some("too long".to_owned());

    app.update(Box::new(key_msg(KeyCode::Char('i'))));

    assert_eq!(app.focus(), InputFocus::Draft);
    assert!(app.post_error().is_none());
}

#[rstest]
fn enter_submits_from_the_input(mut focused_app: BoardApp) {
    let cmd = focused_app.update(Box::new(key_msg(KeyCode::Enter)));

    assert!(cmd.is_some());
    assert!(focused_app.is_posting());
}

#[rstest]
fn edits_are_ignored_while_posting(mut focused_app: BoardApp) {
    focused_app.handle_message(&AppMsg::DraftChanged("sent".to_owned()));
    focused_app.posting = PostingState::Posting;

    focused_app.update(Box::new(key_msg(KeyCode::Char('x'))));
    focused_app.update(Box::new(key_msg(KeyCode::Backspace)));
    focused_app.handle_message(&AppMsg::DraftChanged("typed meanwhile".to_owned()));

    assert_eq!(focused_app.draft_text(), "sent");

    focused_app.handle_message(&AppMsg::PostCompleted {
        outcome: crate::api::PostOutcome::new(true, None),
        latency_ms: 3,
    });
    focused_app.update(Box::new(key_msg(KeyCode::Char('y'))));

    assert_eq!(focused_app.draft_text(), "y", "editing resumes once the post completes");
}
