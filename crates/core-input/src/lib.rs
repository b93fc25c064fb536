//! Terminal input: crossterm events translated into `core_events` and pushed
//! onto the main loop's channel by a background task.

mod async_service;
pub use async_service::AsyncInputShutdown;

use async_service::spawn_async_event_task;

use core_events::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind, KeyModifiers as CMods,
};
use tokio::task::JoinHandle;

/// Spawn the async input service backed by `crossterm::EventStream`.
///
/// Returns the `JoinHandle` for the background task alongside a shutdown handle
/// that can be used to request immediate termination.
pub fn spawn_async_input(
    sender: tokio::sync::mpsc::Sender<Event>,
) -> (JoinHandle<()>, AsyncInputShutdown) {
    spawn_async_event_task(sender)
}

/// Translate a crossterm key event. Releases and keys with no editor
/// meaning yield `None`.
pub fn translate_key(key: &CKeyEvent) -> Option<KeyEvent> {
    if !matches!(key.kind, CKind::Press | CKind::Repeat) {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab | CKeyCode::BackTab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };
    let mut mods = map_mods(key.modifiers);
    // Shifted letters already arrive uppercase; the flag adds nothing.
    if let KeyCode::Char(c) = code
        && c.is_alphabetic()
    {
        mods.remove(KeyModifiers::SHIFT);
    }
    Some(KeyEvent { code, mods })
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
