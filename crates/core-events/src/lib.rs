//! Event types shared by the input task and the main loop.

use std::fmt;
use std::sync::atomic::AtomicU64;

// Capacity of the bounded mpsc channel between the input task and the main
// loop. The input task awaits `send`, so a full channel suspends the task
// instead of dropping keystrokes.
pub const EVENT_CHANNEL_CAP: usize = 1024;

/// Sends that failed because the receiver was gone.
pub static CHANNEL_SEND_FAILURES: AtomicU64 = AtomicU64::new(0);

/// Event consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CTRL)
    }
}

/// Normalized logical keys. Anything the editor has no binding for is
/// dropped by the input layer rather than represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    F(u8),
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
