use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// A keyboard key with optional modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Inputs an app wants to receive, declared by `App::subscriptions`
pub enum Subscription<Msg> {
    Keyboard {
        key: KeyBinding,
        msg: Msg,
        description: String,
    },
}

impl<Msg> Subscription<Msg> {
    /// Keyboard subscription (accepts `KeyCode` or `KeyBinding`)
    pub fn keyboard(key: impl Into<KeyBinding>, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key: key.into(),
            msg,
            description: description.into(),
        }
    }

    pub fn shift_key(code: KeyCode, description: impl Into<String>, msg: Msg) -> Self {
        Self::keyboard(KeyBinding::shift(code), description, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_matches_modifiers_exactly() {
        let binding = KeyBinding::shift(KeyCode::Up);
        assert!(binding.matches(&KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_display() {
        assert_eq!(KeyBinding::ctrl(KeyCode::Char('q')).to_string(), "Ctrl+q");
        assert_eq!(KeyBinding::new(KeyCode::F(1)).to_string(), "F1");
        assert_eq!(KeyBinding::shift(KeyCode::Down).to_string(), "Shift+↓");
    }
}
