use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

/// Maps key presses onto game intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// `None` for keys the game does not use
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Intent> {
        // Raw mode delivers Ctrl+C as a key, not a signal
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        let intent = match key.code {
            KeyCode::Up => Intent::Move(Direction::Up),
            KeyCode::Down => Intent::Move(Direction::Down),
            KeyCode::Left => Intent::Move(Direction::Left),
            KeyCode::Right => Intent::Move(Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Intent::Move(Direction::Up),
                's' => Intent::Move(Direction::Down),
                'a' => Intent::Move(Direction::Left),
                'd' => Intent::Move(Direction::Right),
                'q' => Intent::Quit,
                'r' | 'c' => Intent::Restart,
                _ => return None,
            },

            KeyCode::Esc => Intent::Quit,

            _ => return None,
        };

        Some(intent)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
