//! Key mapping from terminal events to ASCII key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to the key code games understand.
///
/// Release events and keys without a meaning in the arcade map to `None`.
pub fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_interrupt(key) {
        return Some('q');
    }

    match key.code {
        // Arrows share the w/a/s/d bindings
        KeyCode::Up => Some('w'),
        KeyCode::Left => Some('a'),
        KeyCode::Down => Some('s'),
        KeyCode::Right => Some('d'),

        KeyCode::Enter => Some(' '),
        KeyCode::Esc => Some('q'),

        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        KeyCode::Char(' ') => Some(' '),

        _ => None,
    }
}

/// Ctrl+C: treated like `q` wherever it arrives.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
