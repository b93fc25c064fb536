//! Editor state: the single buffer, the phoneme input method and the flags
//! the main loop reads between keys.
//!
//! Invariant: when `mode` is `Mode::Edit` the input method is empty. Mode
//! changes go through the dispatcher, which commits the pending word before
//! leaving phoneme mode.

use core_config::UnmatchedPrefixPolicy;
use core_phoneme::InputMethod;
use core_text::Buffer;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys insert their own characters.
    #[default]
    Edit,
    /// Alphabetic keys are composed into words by the input method.
    Phoneme,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Edit => "EDIT",
            Mode::Phoneme => "PHONEME",
        }
    }
}

/// Editing knobs taken from the config at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSettings {
    pub tab_width: usize,
    pub unmatched_prefix: UnmatchedPrefixPolicy,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            tab_width: 4,
            unmatched_prefix: UnmatchedPrefixPolicy::Discard,
        }
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub buffer: Buffer,
    pub input: InputMethod,
    pub mode: Mode,
    pub settings: EditSettings,
    /// Frame needs repainting.
    pub dirty: bool,
    /// Document differs from the backing file.
    pub modified: bool,
    pub running: bool,
    /// One-shot status line message, cleared by the next key.
    pub status_message: Option<String>,
}

impl EditorState {
    pub fn new(buffer: Buffer, input: InputMethod, settings: EditSettings) -> Self {
        Self {
            buffer,
            input,
            mode: Mode::Edit,
            settings,
            dirty: true,
            modified: false,
            running: true,
            status_message: None,
        }
    }

    pub fn in_phoneme_mode(&self) -> bool {
        self.mode == Mode::Phoneme
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(target: "actions.dispatch", from = self.mode.label(), to = mode.label(), "mode_change");
            self.mode = mode;
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) -> bool {
        self.status_message.take().is_some()
    }

    /// Name shown in the status line.
    pub fn display_name(&self) -> String {
        match &self.buffer.file_name {
            Some(p) => p.display().to_string(),
            None => "[No Name]".to_string(),
        }
    }
}
