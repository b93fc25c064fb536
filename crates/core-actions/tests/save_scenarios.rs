mod common;
use common::*;

use core_actions::{EditorKey, open_buffer};
use core_phoneme::{InputMethod, PhonemeTable};
use core_state::{EditSettings, EditorState};
use core_text::LoadOutcome;

#[test]
fn edit_save_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "first\nsecond").unwrap();

    let (buffer, outcome) = open_buffer(Some(path.clone()), 4, 20).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded { lines: 2 });
    let ime = InputMethod::new(PhonemeTable::standard(), Box::new(dictionary()));
    let mut st = EditorState::new(buffer, ime, EditSettings::default());

    press(&mut st, EditorKey::Down);
    press(&mut st, EditorKey::TogglePhonemeMode);
    type_keys(&mut st, "Hhai ");
    assert!(st.modified);
    press(&mut st, EditorKey::Save);
    assert!(!st.modified);
    assert!(st.status_message.as_deref().is_some_and(|m| m.contains("written")));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nHi second");

    let (reopened, _) = open_buffer(Some(path), 4, 20).unwrap();
    assert_eq!(reopened.to_text(), "first\nHi second");
}

#[test]
fn save_unnamed_buffer_is_refused() {
    let mut st = editor("draft");
    type_keys(&mut st, "!");
    press(&mut st, EditorKey::Save);
    assert_eq!(st.status_message.as_deref(), Some("No file name"));
    assert!(st.modified);
}
