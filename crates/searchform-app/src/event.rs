//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::FormController`] state machine.

use crate::KeyInput;

/// Events processed by the form controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Literal text, inserted into the focused field as if typed.
    Paste(String),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

impl AppEvent {
    /// Build an event from a canonical key token.
    ///
    /// Recognized tokens become [`AppEvent::Key`]; anything else is literal
    /// text for the focused field.
    pub fn from_token(token: &str) -> Self {
        token.parse().map_or_else(|_| Self::Paste(token.to_string()), Self::Key)
    }
}

impl From<KeyInput> for AppEvent {
    fn from(key: KeyInput) -> Self {
        Self::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_token_is_key() {
        assert_eq!(AppEvent::from_token("shift+tab"), AppEvent::Key(KeyInput::BackTab));
        assert_eq!(AppEvent::from_token("x"), AppEvent::Key(KeyInput::Char('x')));
    }

    #[test]
    fn unknown_token_is_literal_text() {
        assert_eq!(AppEvent::from_token("Denver"), AppEvent::Paste("Denver".into()));
        assert_eq!(AppEvent::from_token(""), AppEvent::Paste(String::new()));
    }
}
