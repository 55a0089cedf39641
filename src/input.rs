use crate::snake::Direction::{self, *};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
}

/// Maps a key to a command. Unknown keys map to nothing.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    // Raw mode swallows SIGINT, so CTRL+C has to be handled here
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Right)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
