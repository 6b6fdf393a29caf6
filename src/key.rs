//! Terminal-agnostic key vocabulary.
//!
//! Everything below the event loop speaks `Key`, never crossterm types,
//! so the wizard, the table and the navigator run deterministically in tests.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character.
    Char(char),
    /// Enter / Return. Commits in the wizard, enters or confirms elsewhere.
    Enter,
    /// Newline-producing input (Alt+Enter, Ctrl+J).
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Next pane.
    Tab,
    /// Previous pane (Shift+Tab).
    BackTab,
    Esc,
    /// Global quit.
    CtrlC,
}

impl Key {
    /// Parse the identifier-string form of a key, e.g. `"ctrl+c"` or `"a"`.
    ///
    /// Unknown identifiers yield `None`; callers treat that as a no-op.
    pub fn parse(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }

        let key = match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "alt+enter" | "ctrl+j" => Key::Newline,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "home" => Key::Home,
            "end" => Key::End,
            "tab" => Key::Tab,
            "shift+tab" | "backtab" => Key::BackTab,
            "esc" | "escape" => Key::Esc,
            "ctrl+c" => Key::CtrlC,
            "space" => Key::Char(' '),
            _ => return None,
        };
        Some(key)
    }

    pub fn is_quit(&self) -> bool {
        *self == Key::CtrlC
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "enter"),
            Key::Newline => write!(f, "alt+enter"),
            Key::Backspace => write!(f, "backspace"),
            Key::Delete => write!(f, "delete"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Home => write!(f, "home"),
            Key::End => write!(f, "end"),
            Key::Tab => write!(f, "tab"),
            Key::BackTab => write!(f, "shift+tab"),
            Key::Esc => write!(f, "esc"),
            Key::CtrlC => write!(f, "ctrl+c"),
        }
    }
}
