//! Input handling for the TUI application.
//!
//! Key events are mapped differently depending on which part of the screen
//! has focus: list keys navigate and trigger commands, while draft keys edit
//! text.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::InputFocus;

/// Maps a key event to an application message for the given focus.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, focus: InputFocus) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }

    match focus {
        InputFocus::List => map_list_key(key.key),
        InputFocus::Draft => map_draft_key(key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('i') | KeyCode::Tab => Some(AppMsg::FocusDraft),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_draft_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Enter => Some(AppMsg::SubmitRequested),
        KeyCode::Esc | KeyCode::Tab => Some(AppMsg::FocusList),
        KeyCode::Backspace => Some(AppMsg::DraftBackspace),
        KeyCode::Char(character) if types_text(key.modifiers) => {
            Some(AppMsg::DraftInsertChar(character))
        }
        _ => None,
    }
}

/// Only unmodified or shifted characters are text; Ctrl and Alt chords are
/// not typed into the draft.
const fn types_text(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;
    use crate::tui::state::InputFocus;

    fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
        bubbletea_rs::event::KeyMsg {
            key,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'), "Quit")]
    #[case(KeyCode::Char('j'), "ScrollDown")]
    #[case(KeyCode::Up, "ScrollUp")]
    #[case(KeyCode::Char('r'), "RefreshRequested")]
    #[case(KeyCode::Char('i'), "FocusDraft")]
    #[case(KeyCode::Tab, "FocusDraft")]
    #[case(KeyCode::Char('?'), "ToggleHelp")]
    fn list_focus_maps_navigation_keys(#[case] key: KeyCode, #[case] expected: &str) {
        let mapped = map_key_to_message(&key_msg(key), InputFocus::List);

        assert_eq!(mapped.map(|msg| format!("{msg:?}")), Some(expected.to_owned()));
    }

    #[test]
    fn draft_focus_types_letters_that_would_otherwise_be_commands() {
        let mapped = map_key_to_message(&key_msg(KeyCode::Char('q')), InputFocus::Draft);

        assert!(matches!(mapped, Some(AppMsg::DraftInsertChar('q'))));
    }

    #[rstest]
    #[case(KeyCode::Enter, "SubmitRequested")]
    #[case(KeyCode::Esc, "FocusList")]
    #[case(KeyCode::Tab, "FocusList")]
    #[case(KeyCode::Backspace, "DraftBackspace")]
    fn draft_focus_maps_editing_keys(#[case] key: KeyCode, #[case] expected: &str) {
        let mapped = map_key_to_message(&key_msg(key), InputFocus::Draft);

        assert_eq!(mapped.map(|msg| format!("{msg:?}")), Some(expected.to_owned()));
    }

    #[rstest]
    #[case::ctrl_a(KeyCode::Char('a'), KeyModifiers::CONTROL)]
    #[case::alt_x(KeyCode::Char('x'), KeyModifiers::ALT)]
    #[case::ctrl_shift_k(KeyCode::Char('K'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)]
    fn draft_focus_ignores_modified_characters(
        #[case] key: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        let key_msg = bubbletea_rs::event::KeyMsg { key, modifiers };

        assert!(map_key_to_message(&key_msg, InputFocus::Draft).is_none());
    }

    #[test]
    fn draft_focus_types_shifted_characters() {
        let key_msg = bubbletea_rs::event::KeyMsg {
            key: KeyCode::Char('A'),
            modifiers: KeyModifiers::SHIFT,
        };

        assert!(matches!(
            map_key_to_message(&key_msg, InputFocus::Draft),
            Some(AppMsg::DraftInsertChar('A'))
        ));
    }

    #[rstest]
    #[case(InputFocus::List)]
    #[case(InputFocus::Draft)]
    fn ctrl_c_quits_from_any_focus(#[case] focus: InputFocus) {
        let key = bubbletea_rs::event::KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };

        assert!(matches!(map_key_to_message(&key, focus), Some(AppMsg::Quit)));
    }

    #[test]
    fn unmapped_list_key_is_ignored() {
        assert!(map_key_to_message(&key_msg(KeyCode::Char('z')), InputFocus::List).is_none());
    }
}
