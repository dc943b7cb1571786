use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Restart,
    Quit,
    None,
}

/// Maps key presses to game intents.
///
/// Steering only applies while a game is running and restarting only once it
/// is over; quitting works at any time.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, game_over: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => return KeyAction::Quit,
            _ => {}
        }

        if game_over {
            return match key.code {
                KeyCode::Char(c) if c.eq_ignore_ascii_case(&'r') => KeyAction::Restart,
                _ => KeyAction::None,
            };
        }

        match direction_for(key.code) {
            Some(direction) => KeyAction::GameAction(Action::Move(direction)),
            None => KeyAction::None,
        }
    }
}

/// Arrow keys and WASD, two bindings per direction
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
