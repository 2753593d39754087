//! crossterm key and mouse events to session gestures.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_types::input::InputEvent;

/// Map one key event. Releases and unbound keys map to `None`.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char('l') if ctrl => Some(InputEvent::ClearScreen),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(InputEvent::TextInput(c)),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Up => Some(InputEvent::HistoryUp),
        KeyCode::Down => Some(InputEvent::HistoryDown),
        KeyCode::Tab => Some(InputEvent::TabComplete),
        _ => None,
    }
}

/// Screen cell (column, row) of a left-button press.
pub fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}
