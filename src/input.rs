use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, ModifierKeyCode};

use crate::components::Command;

/// Maps a key press to a command. Releases and repeats are ignored.
#[must_use]
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Left | KeyCode::Char('j') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Command::MoveRight,
        KeyCode::Up | KeyCode::Char('i') => Command::Rotate,
        KeyCode::Down | KeyCode::Char('k') => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Modifier(ModifierKeyCode::LeftShift) | KeyCode::Char('c') | KeyCode::Tab => {
            Command::Hold
        }
        _ => return None,
    };
    Some(command)
}
