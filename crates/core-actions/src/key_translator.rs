//! Fixed key bindings.
//!
//! | key              | action              |
//! |------------------|---------------------|
//! | arrows           | motion / cycling    |
//! | Enter, Tab       | insert              |
//! | Backspace        | delete              |
//! | F2               | toggle mark         |
//! | Ctrl-P           | toggle phoneme mode |
//! | Ctrl-S           | save                |
//! | Ctrl-C, Ctrl-Q   | quit                |

use crate::EditorKey;
use core_events::{KeyCode, KeyEvent, KeyModifiers};

/// Map a normalized key event to an editor command. Unbound keys (Esc, other
/// function keys, Alt chords, unknown Ctrl chords) return `None`.
pub fn translate_key(key: &KeyEvent) -> Option<EditorKey> {
    if key.mods.contains(KeyModifiers::CTRL) {
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        return match c.to_ascii_lowercase() {
            'c' | 'q' => Some(EditorKey::Quit),
            's' => Some(EditorKey::Save),
            'p' => Some(EditorKey::TogglePhonemeMode),
            _ => None,
        };
    }
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(c) if !c.is_control() => EditorKey::Char(c),
        KeyCode::Char(_) => return None,
        KeyCode::Enter => EditorKey::Enter,
        KeyCode::Backspace => EditorKey::Backspace,
        KeyCode::Tab => EditorKey::Tab,
        KeyCode::Left => EditorKey::Left,
        KeyCode::Right => EditorKey::Right,
        KeyCode::Up => EditorKey::Up,
        KeyCode::Down => EditorKey::Down,
        KeyCode::F(2) => EditorKey::ToggleMark,
        KeyCode::F(_) | KeyCode::Esc => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> Option<EditorKey> {
        translate_key(&KeyEvent::plain(code))
    }

    #[test]
    fn control_chords() {
        assert_eq!(translate_key(&KeyEvent::ctrl('c')), Some(EditorKey::Quit));
        assert_eq!(translate_key(&KeyEvent::ctrl('q')), Some(EditorKey::Quit));
        assert_eq!(translate_key(&KeyEvent::ctrl('s')), Some(EditorKey::Save));
        assert_eq!(translate_key(&KeyEvent::ctrl('P')), Some(EditorKey::TogglePhonemeMode));
        assert_eq!(translate_key(&KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(plain(KeyCode::F(2)), Some(EditorKey::ToggleMark));
        assert_eq!(plain(KeyCode::F(3)), None);
        assert_eq!(plain(KeyCode::Esc), None);
        assert_eq!(plain(KeyCode::Up), Some(EditorKey::Up));
        assert_eq!(plain(KeyCode::Tab), Some(EditorKey::Tab));
    }

    #[test]
    fn printable_chars_pass_through() {
        assert_eq!(plain(KeyCode::Char('H')), Some(EditorKey::Char('H')));
        assert_eq!(plain(KeyCode::Char(' ')), Some(EditorKey::Char(' ')));
        assert_eq!(plain(KeyCode::Char('\u{7}')), None);
        let alt = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(translate_key(&alt), None);
    }
}
