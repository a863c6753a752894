//! Key mapping from terminal events to logical keys.

use crate::types::LogicalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a logical key.
pub fn map_key_event(key: KeyEvent) -> Option<LogicalKey> {
    if should_quit(key) {
        return Some(LogicalKey::Exit);
    }
    map_key_code(key.code)
}

/// Map a key code without modifiers.
pub fn map_key_code(code: KeyCode) -> Option<LogicalKey> {
    match code {
        // Scale
        KeyCode::Char('+') | KeyCode::Char('=') => Some(LogicalKey::ScaleUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(LogicalKey::ScaleDown),

        // Speed
        KeyCode::Char('[') | KeyCode::Char('{') => Some(LogicalKey::SpeedDown),
        KeyCode::Char(']') | KeyCode::Char('}') => Some(LogicalKey::SpeedUp),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(LogicalKey::Exit),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
