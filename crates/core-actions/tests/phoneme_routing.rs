mod common;
use common::*;

use core_actions::EditorKey;
use core_config::UnmatchedPrefixPolicy;
use core_state::Mode;
use pretty_assertions::assert_eq;

#[test]
fn space_commits_resolved_word_then_inserts_itself() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "hhai ");
    assert_eq!(st.buffer.to_text(), "hi ");
    assert!(st.input.is_empty());
    assert!(st.modified);
}

#[test]
fn composing_leaves_buffer_untouched() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "nnao");
    assert_eq!(st.buffer.to_text(), "");
    assert_eq!(st.input.panel_text(), "noʊ\nno [1/2]");
}

#[test]
fn arrows_cycle_candidates_instead_of_moving() {
    let mut st = editor("xy\nz");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "hhai");
    press(&mut st, EditorKey::Down);
    press(&mut st, EditorKey::Down);
    assert_eq!(st.input.resolved_word().as_deref(), Some("hye"));
    press(&mut st, EditorKey::Up);
    assert_eq!(st.input.resolved_word().as_deref(), Some("high"));
    assert_eq!(st.buffer.cursor_line(), 0, "cursor did not move");
    press(&mut st, EditorKey::Enter);
    assert_eq!(st.buffer.to_text(), "high\nxy\nz");
}

#[test]
fn arrows_move_when_nothing_to_cycle() {
    let mut st = editor("ab\ncd");
    press(&mut st, EditorKey::TogglePhonemeMode);
    press(&mut st, EditorKey::Down);
    assert_eq!(st.buffer.cursor_line(), 1);
}

#[test]
fn capitalized_first_key_title_cases() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "Hsip.");
    assert_eq!(st.buffer.to_text(), "Ship.");
}

#[test]
fn backspace_edits_word_before_buffer() {
    let mut st = editor("ab");
    press(&mut st, EditorKey::Right);
    press(&mut st, EditorKey::Right);
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "hsiph");
    press(&mut st, EditorKey::Backspace); // pending 'h'
    press(&mut st, EditorKey::Backspace); // phoneme P
    assert_eq!(st.input.phonemes().len(), 2);
    assert_eq!(st.buffer.to_text(), "ab");
    press(&mut st, EditorKey::Backspace);
    press(&mut st, EditorKey::Backspace);
    assert!(st.input.is_empty());
    press(&mut st, EditorKey::Backspace);
    assert_eq!(st.buffer.to_text(), "a");
}

#[test]
fn toggling_off_commits_pending_word() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "nnao");
    press(&mut st, EditorKey::TogglePhonemeMode);
    assert_eq!(st.mode, Mode::Edit);
    assert!(st.input.is_empty());
    assert_eq!(st.buffer.to_text(), "no");
    type_keys(&mut st, "hh");
    assert_eq!(st.buffer.to_text(), "nohh");
}

#[test]
fn tab_commits_then_inserts_spaces() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "hhai");
    press(&mut st, EditorKey::Tab);
    assert_eq!(st.buffer.to_text(), "hi    ");
}

#[test]
fn invalid_keystroke_resets_and_inserts_key() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "h,");
    assert!(st.input.is_empty());
    assert_eq!(st.buffer.to_text(), ",");
}

#[test]
fn unmatched_prefix_discarded_by_default() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "nnaohk");
    assert_eq!(st.buffer.to_text(), "");
    assert_eq!(st.input.resolved_word().as_deref(), Some("no"));
    type_keys(&mut st, " ");
    assert_eq!(st.buffer.to_text(), "no ");
}

#[test]
fn unmatched_prefix_literal_policy_inserts_raw_keys() {
    let mut st = editor_with("", 4, 20, UnmatchedPrefixPolicy::Literal);
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "nnaohk");
    assert_eq!(st.buffer.to_text(), "nohk");
    assert!(st.input.is_empty());
}

#[test]
fn unknown_sequence_commits_nothing() {
    let mut st = editor("");
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "pt!");
    assert_eq!(st.buffer.to_text(), "!");
}
