//! Editor actions: key translation, dispatch onto `EditorState`, file IO.
//!
//! The runtime feeds every `core_events::KeyEvent` through `translate_key`;
//! recognised keys become an `EditorKey` that `dispatch` applies. Nothing in
//! this crate touches the terminal.

mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{WriteFileResult, open_buffer, write_file};
pub use key_translator::translate_key;

/// The closed set of editor commands a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Backspace,
    Tab,
    ToggleMark,
    TogglePhonemeMode,
    Save,
    Quit,
}

impl EditorKey {
    /// Short label for logs; characters are never logged verbatim.
    pub fn kind(&self) -> &'static str {
        match self {
            EditorKey::Char(_) => "char",
            EditorKey::Left => "left",
            EditorKey::Right => "right",
            EditorKey::Up => "up",
            EditorKey::Down => "down",
            EditorKey::Enter => "enter",
            EditorKey::Backspace => "backspace",
            EditorKey::Tab => "tab",
            EditorKey::ToggleMark => "toggle_mark",
            EditorKey::TogglePhonemeMode => "toggle_phoneme_mode",
            EditorKey::Save => "save",
            EditorKey::Quit => "quit",
        }
    }
}
