//! Key bindings: fixed hjkl-style set from the original layout plus arrows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    SoftDrop,
    HardDrop,
    Pause,
    Quit,
    None,
}

/// Map key event to game action. Unrecognized keys are no-ops.
pub fn key_to_action(key: KeyEvent) -> Action {
    let KeyEvent { code, modifiers, .. } = key;
    if !modifiers.is_empty() && modifiers != KeyModifiers::SHIFT {
        return Action::None;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('p') => Action::Pause,
        KeyCode::Left | KeyCode::Char('h') => Action::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::MoveRight,
        KeyCode::Char('u') => Action::RotateLeft,
        KeyCode::Up | KeyCode::Char('i') => Action::RotateRight,
        KeyCode::Down | KeyCode::Char('k') => Action::SoftDrop,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('j') => Action::HardDrop,
        _ => Action::None,
    }
}
