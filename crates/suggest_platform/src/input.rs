//! Input event types for keyboard handling

use serde::{Deserialize, Serialize};

/// Keyboard event delivered to the input element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
    /// An input method (Pinyin, Kana, ...) composition is in progress
    pub is_composing: bool,
}

impl KeyboardEvent {
    /// Create a key-down event with no modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            is_composing: false,
        }
    }

    /// Create a key-down event for a printable character
    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    /// Mark this event as part of an IME composition
    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }

    /// Attach modifiers
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl From<Key> for KeyboardEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Check if only shift is held
    pub fn shift_only(&self) -> bool {
        self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Key identifiers
///
/// Only the keys the autocomplete reacts to are named; everything else is
/// carried as [`Key::Char`] or [`Key::Other`] with the host's key name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    /// A printable character
    Char(char),
    /// Any other key, by host name (e.g. `"F5"`, `"PageDown"`)
    Other(String),
}

impl Key {
    /// Parse a DOM-style key name (`KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Home" => Key::Home,
            "End" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }

    /// Check if this is a printable character
    pub fn is_char(&self) -> bool {
        matches!(self, Key::Char(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("m"), Key::Char('m'));
        assert_eq!(Key::from_name("é"), Key::Char('é'));
        assert_eq!(Key::from_name("PageDown"), Key::Other("PageDown".into()));
    }

    #[test]
    fn test_keyboard_event_builders() {
        let event = KeyboardEvent::new(Key::Enter).composing();
        assert!(event.is_composing);
        assert!(event.modifiers.is_empty());

        let shifted = KeyboardEvent::char('A').with_modifiers(Modifiers {
            shift: true,
            ..Default::default()
        });
        assert!(shifted.modifiers.shift_only());
    }
}
