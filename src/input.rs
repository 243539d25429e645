//! Key mapping from crossterm events to [`GameInput`].

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate one key event. Releases and repeats map to `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameInput::Right,
        KeyCode::Char('p') | KeyCode::Char('P') => GameInput::Pause,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}
