//! Dispatcher applying `EditorKey` to mutable editor state.
//!
//! Sub-modules:
//! * `motion` - cursor movement and candidate cycling
//! * `mode`   - phoneme mode and mark toggles
//! * `edit`   - text insertion, backspace and the phoneme input path
//!
//! Save and quit are handled inline.

use crate::EditorKey;
use crate::io_ops::{self, WriteFileResult};
use core_state::EditorState;

mod edit;
mod mode;
mod motion;

/// Result of dispatching a single `EditorKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }

    fn or_dirty(self, dirty: bool) -> Self {
        Self {
            dirty: self.dirty || dirty,
            quit: self.quit,
        }
    }
}

/// Apply a key to editor state. Returns `DispatchResult` describing whether
/// a repaint is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(key: EditorKey, state: &mut EditorState) -> DispatchResult {
    let had_status = state.clear_status();
    tracing::trace!(target: "actions.dispatch", key = key.kind(), mode = state.mode.label(), "dispatch");
    let result = match key {
        EditorKey::Left | EditorKey::Right | EditorKey::Up | EditorKey::Down => {
            motion::handle_motion(key, state)
        }
        EditorKey::ToggleMark => mode::toggle_mark(state),
        EditorKey::TogglePhonemeMode => mode::toggle_phoneme_mode(state),
        EditorKey::Char(c) => edit::handle_char(c, state),
        EditorKey::Enter => edit::insert_terminator("\n", state),
        EditorKey::Tab => {
            let spaces = " ".repeat(state.settings.tab_width);
            edit::insert_terminator(&spaces, state)
        }
        EditorKey::Backspace => edit::handle_backspace(state),
        EditorKey::Save => handle_save(state),
        EditorKey::Quit => {
            state.running = false;
            tracing::info!(target: "actions.dispatch", modified = state.modified, "quit");
            DispatchResult::quit()
        }
    };
    let result = result.or_dirty(had_status);
    if result.dirty {
        state.dirty = true;
    }
    result
}

fn handle_save(state: &mut EditorState) -> DispatchResult {
    match io_ops::write_file(state) {
        WriteFileResult::Success { bytes } => {
            let name = state.display_name();
            state.set_status(format!("\"{name}\" {bytes}B written"));
        }
        WriteFileResult::NoFilename => state.set_status("No file name"),
        WriteFileResult::Error => state.set_status("Write failed (see log)"),
    }
    DispatchResult::dirty()
}
