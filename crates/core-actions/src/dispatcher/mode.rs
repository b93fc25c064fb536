//! Mode and mark toggles.

use super::DispatchResult;
use super::edit::commit_pending;
use core_state::{EditorState, Mode};

pub(crate) fn toggle_phoneme_mode(state: &mut EditorState) -> DispatchResult {
    match state.mode {
        Mode::Phoneme => {
            commit_pending(state);
            state.set_mode(Mode::Edit);
        }
        Mode::Edit => state.set_mode(Mode::Phoneme),
    }
    DispatchResult::dirty()
}

pub(crate) fn toggle_mark(state: &mut EditorState) -> DispatchResult {
    if state.buffer.has_mark() {
        state.buffer.clear_mark();
        tracing::trace!(target: "actions.dispatch", "mark_cleared");
    } else {
        state.buffer.set_mark();
    }
    DispatchResult::dirty()
}
