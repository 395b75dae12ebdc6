//! Key mapping from terminal events to game commands

use crate::render::KeyCap;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Submit,
    Delete,
    NewGame,
    Quit,
}

impl Command {
    /// On-screen key to highlight when this command is entered from the keyboard
    #[must_use]
    pub const fn key_cap(self) -> Option<KeyCap> {
        match self {
            Self::Letter(c) => Some(KeyCap::Letter(c)),
            Self::Submit => Some(KeyCap::Enter),
            Self::Delete => Some(KeyCap::Delete),
            Self::NewGame | Self::Quit => None,
        }
    }
}

impl From<KeyCap> for Command {
    fn from(cap: KeyCap) -> Self {
        match cap {
            KeyCap::Letter(c) => Self::Letter(c),
            KeyCap::Enter => Self::Submit,
            KeyCap::Delete => Self::Delete,
        }
    }
}

/// Map keyboard input to game commands
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Command::Quit),
            KeyCode::Char('n' | 'N') => Some(Command::NewGame),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Command::Letter(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::Delete),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(map_key(key(KeyCode::Char('a'))), Some(Command::Letter('a')));
        assert_eq!(map_key(key(KeyCode::Char('Z'))), Some(Command::Letter('z')));
    }

    #[test]
    fn non_letters_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), None);
        assert_eq!(map_key(key(KeyCode::Char(' '))), None);
        assert_eq!(map_key(key(KeyCode::Char('é'))), None);
        assert_eq!(map_key(key(KeyCode::Left)), None);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Command::Submit));
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(Command::Delete));
        assert_eq!(map_key(key(KeyCode::Delete)), Some(Command::Delete));
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(ctrl('c')), Some(Command::Quit));
        assert_eq!(map_key(ctrl('n')), Some(Command::NewGame));
        assert_eq!(map_key(ctrl('x')), None);
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn key_caps_round_trip() {
        for cap in [KeyCap::Letter('q'), KeyCap::Enter, KeyCap::Delete] {
            assert_eq!(Command::from(cap).key_cap(), Some(cap));
        }
        assert_eq!(Command::Quit.key_cap(), None);
    }
}
