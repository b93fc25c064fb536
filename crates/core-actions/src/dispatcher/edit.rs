//! Text edits and the phoneme input path.
//!
//! In phoneme mode alphabetic keys go to the input method. Every other
//! insertion first commits the word in progress, so text always lands in the
//! order it was typed. Input method errors are logged and recovered here;
//! none of them reach the caller.

use super::DispatchResult;
use core_config::UnmatchedPrefixPolicy;
use core_phoneme::{KeyOutcome, PhonemeError};
use core_state::EditorState;

/// Insert the resolved word (if any) and reset the input method.
pub(crate) fn commit_pending(state: &mut EditorState) -> bool {
    if state.input.is_empty() {
        return false;
    }
    let word = state.input.complete();
    insert_text(&word, state);
    true
}

fn insert_text(text: &str, state: &mut EditorState) {
    if text.is_empty() {
        return;
    }
    state.buffer.insert_str(text);
    state.modified = true;
}

/// Enter and Tab: commit, then insert `text`.
pub(crate) fn insert_terminator(text: &str, state: &mut EditorState) -> DispatchResult {
    if state.in_phoneme_mode() {
        commit_pending(state);
    }
    insert_text(text, state);
    DispatchResult::dirty()
}

pub(crate) fn handle_char(ch: char, state: &mut EditorState) -> DispatchResult {
    if !state.in_phoneme_mode() {
        insert_text(&ch.to_string(), state);
        return DispatchResult::dirty();
    }
    match state.input.push_char(ch) {
        Ok(KeyOutcome::Composing) => {}
        Ok(KeyOutcome::Committed(word)) => {
            insert_text(&word, state);
            insert_text(&ch.to_string(), state);
        }
        Err(err) => recover(err, ch, state),
    }
    DispatchResult::dirty()
}

fn recover(err: PhonemeError, ch: char, state: &mut EditorState) {
    tracing::warn!(target: "actions.dispatch", error = %err, "phoneme_input_error");
    match err {
        // The session already reset; the key still inserts itself.
        PhonemeError::InvalidKeystroke(_) => insert_text(&ch.to_string(), state),
        PhonemeError::UnmatchedPrefix(raw) => {
            if state.settings.unmatched_prefix == UnmatchedPrefixPolicy::Literal {
                commit_pending(state);
                insert_text(&raw, state);
            }
        }
    }
}

pub(crate) fn handle_backspace(state: &mut EditorState) -> DispatchResult {
    if state.in_phoneme_mode() && !state.input.is_empty() {
        state.input.backspace();
        return DispatchResult::dirty();
    }
    let had_mark = state.buffer.has_mark();
    let extent = |st: &EditorState| (st.buffer.line_count(), st.buffer.char_count());
    let before = extent(state);
    state.buffer.delete();
    if extent(state) != before {
        state.modified = true;
        return DispatchResult::dirty();
    }
    // An empty region only drops the mark; the start of the document with no
    // mark changes nothing.
    if had_mark {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
