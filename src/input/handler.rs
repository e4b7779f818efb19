use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(InputEvent),
    /// Start a new game once the current one is over
    Play,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(InputEvent::Up),
            KeyCode::Right => KeyAction::Steer(InputEvent::Right),
            KeyCode::Down => KeyAction::Steer(InputEvent::Down),
            KeyCode::Left => KeyAction::Steer(InputEvent::Left),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(InputEvent::Up),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(InputEvent::Right),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(InputEvent::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(InputEvent::Left),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Play,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Steer(InputEvent::Up));
        assert_eq!(press(KeyCode::Right), KeyAction::Steer(InputEvent::Right));
        assert_eq!(press(KeyCode::Down), KeyAction::Steer(InputEvent::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Steer(InputEvent::Left));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Steer(InputEvent::Up));
        assert_eq!(press(KeyCode::Char('d')), KeyAction::Steer(InputEvent::Right));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Steer(InputEvent::Down));
        assert_eq!(press(KeyCode::Char('a')), KeyAction::Steer(InputEvent::Left));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Steer(InputEvent::Up)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::new().handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_play_keys() {
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Play);
        assert_eq!(press(KeyCode::Enter), KeyAction::Play);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Tab), KeyAction::None);
    }
}
