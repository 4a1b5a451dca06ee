//! Key and mouse mapping from terminal events to deck input.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to deck input.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::PageDown => Some(InputEvent::Navigate(Direction::Next)),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('p')
        | KeyCode::Char('P')
        | KeyCode::PageUp => Some(InputEvent::Navigate(Direction::Previous)),

        // Runner
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputEvent::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(InputEvent::Restart),

        _ => None,
    }
}

/// Map a mouse event to a pointer update.
///
/// `origin` is the terminal cell where grid column 0, row 0 is drawn; the
/// result is in grid coordinates and may fall outside the grid.
pub fn map_mouse(mouse: MouseEvent, origin: (u16, u16)) -> Option<InputEvent> {
    let click = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => true,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => false,
        _ => return None,
    };
    Some(InputEvent::Pointer {
        x: i32::from(mouse.column) - i32::from(origin.0),
        y: i32::from(mouse.row) - i32::from(origin.1),
        click,
    })
}

/// Check if key should quit the deck.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
