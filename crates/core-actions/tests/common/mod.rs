#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, EditorKey, dispatch};
use core_config::UnmatchedPrefixPolicy;
use core_phoneme::dictionary::spell;
use core_phoneme::{DictionaryInterpreter, InputMethod, PhonemeTable};
use core_state::{EditSettings, EditorState};
use core_text::Buffer;

pub const DICTIONARY: &[(&str, &str)] = &[
    ("hhai", "hi"),
    ("hhai", "high"),
    ("hhai", "hye"),
    ("nnao", "no"),
    ("nnao", "know"),
    ("hsip", "ship"),
];

pub fn dictionary() -> DictionaryInterpreter {
    let table = PhonemeTable::standard();
    DICTIONARY
        .iter()
        .map(|(spelling, word)| (spell(spelling, table).unwrap(), word.to_string()))
        .collect()
}

pub fn editor_with(
    text: &str,
    height: usize,
    width: usize,
    policy: UnmatchedPrefixPolicy,
) -> EditorState {
    let ime = InputMethod::new(PhonemeTable::standard(), Box::new(dictionary()));
    let settings = EditSettings {
        tab_width: 4,
        unmatched_prefix: policy,
    };
    EditorState::new(Buffer::from_text(text, height, width), ime, settings)
}

pub fn editor(text: &str) -> EditorState {
    editor_with(text, 4, 20, UnmatchedPrefixPolicy::Discard)
}

pub fn press(state: &mut EditorState, key: EditorKey) -> DispatchResult {
    dispatch(key, state)
}

/// Dispatch each character of `keys` as `EditorKey::Char`.
pub fn type_keys(state: &mut EditorState, keys: &str) {
    for ch in keys.chars() {
        dispatch(EditorKey::Char(ch), state);
    }
}
