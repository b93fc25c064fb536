//! Cursor motion. In phoneme mode with candidates on offer, Up and Down
//! cycle the candidate list instead of moving.

use super::DispatchResult;
use crate::EditorKey;
use core_state::EditorState;

pub(crate) fn handle_motion(key: EditorKey, state: &mut EditorState) -> DispatchResult {
    if state.in_phoneme_mode() && state.input.has_candidates() {
        match key {
            EditorKey::Up => {
                state.input.cycle_backward();
                return DispatchResult::dirty();
            }
            EditorKey::Down => {
                state.input.cycle_forward();
                return DispatchResult::dirty();
            }
            _ => {}
        }
    }
    let buffer = &mut state.buffer;
    let before = (buffer.cursor_line(), buffer.cursor(), *buffer.viewport());
    match key {
        EditorKey::Left => buffer.move_left(),
        EditorKey::Right => buffer.move_right(),
        EditorKey::Up => buffer.move_up(),
        EditorKey::Down => buffer.move_down(),
        _ => return DispatchResult::clean(),
    }
    let after = (buffer.cursor_line(), buffer.cursor(), *buffer.viewport());
    tracing::trace!(target: "actions.dispatch", key = key.kind(), line = after.0, column = after.1, "motion");
    if before != after {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
