//! Terminal-agnostic keyboard input.
//!
//! Keys travel through the system as [`KeyInput`] values. Each key also has a
//! canonical string token (`"tab"`, `"shift+tab"`, `"ctrl+c"`, a literal
//! character, ...) so scripted sessions and tests can describe input the way
//! the form documentation does.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Keyboard input abstraction.
///
/// Decouples form logic from terminal libraries (crossterm, termion, etc.)
/// enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key (focus next position).
    Tab,
    /// Shift+Tab (focus previous position).
    BackTab,
    /// Escape key (quit).
    Esc,
    /// Ctrl+C (quit).
    CtrlC,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (focus previous position).
    Up,
    /// Down arrow key (focus next position).
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Named keys and their canonical tokens. Single characters are handled
/// separately.
const NAMED_KEYS: [(KeyInput, &str); 13] = [
    (KeyInput::Enter, "enter"),
    (KeyInput::Backspace, "backspace"),
    (KeyInput::Delete, "delete"),
    (KeyInput::Tab, "tab"),
    (KeyInput::BackTab, "shift+tab"),
    (KeyInput::Esc, "esc"),
    (KeyInput::CtrlC, "ctrl+c"),
    (KeyInput::Left, "left"),
    (KeyInput::Right, "right"),
    (KeyInput::Up, "up"),
    (KeyInput::Down, "down"),
    (KeyInput::Home, "home"),
    (KeyInput::End, "end"),
];

/// Token could not be mapped to a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyTokenError {
    /// Empty token.
    #[error("empty key token")]
    Empty,

    /// Multi-character token that names no known key.
    #[error("unknown key token: {0:?}")]
    UnknownToken(String),
}

impl KeyInput {
    /// Canonical token for this key.
    pub fn token(self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            named => NAMED_KEYS
                .iter()
                .find(|(key, _)| *key == named)
                .map(|(_, token)| (*token).to_string())
                .unwrap_or_default(),
        }
    }

    /// Keys that end the session regardless of mode: `q`, `esc`, `ctrl+c`.
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Char('q') | Self::Esc | Self::CtrlC)
    }

    /// Keys that move focus around a field set ring.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Tab | Self::BackTab | Self::Enter | Self::Up | Self::Down)
    }

    /// Navigation keys that move focus backwards.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Up | Self::BackTab)
    }

    /// Keys that accept the "add another search" prompt.
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Char('Y' | 'y') | Self::Enter)
    }
}

impl FromStr for KeyInput {
    type Err = KeyTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some((key, _)) = NAMED_KEYS.iter().find(|(_, name)| *name == token) {
            return Ok(*key);
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(KeyTokenError::Empty),
            (Some(c), None) => Ok(Self::Char(c)),
            (Some(_), Some(_)) => Err(KeyTokenError::UnknownToken(token.to_string())),
        }
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_tokens_parse() {
        assert_eq!("tab".parse::<KeyInput>(), Ok(KeyInput::Tab));
        assert_eq!("shift+tab".parse::<KeyInput>(), Ok(KeyInput::BackTab));
        assert_eq!("ctrl+c".parse::<KeyInput>(), Ok(KeyInput::CtrlC));
        assert_eq!("esc".parse::<KeyInput>(), Ok(KeyInput::Esc));
    }

    #[test]
    fn single_character_is_literal() {
        assert_eq!("q".parse::<KeyInput>(), Ok(KeyInput::Char('q')));
        assert_eq!(" ".parse::<KeyInput>(), Ok(KeyInput::Char(' ')));
        assert_eq!("é".parse::<KeyInput>(), Ok(KeyInput::Char('é')));
    }

    #[test]
    fn unknown_and_empty_tokens_rejected() {
        assert_eq!(
            "ctrl+x".parse::<KeyInput>(),
            Err(KeyTokenError::UnknownToken("ctrl+x".into()))
        );
        assert_eq!("".parse::<KeyInput>(), Err(KeyTokenError::Empty));
    }

    #[test]
    fn every_named_key_has_distinct_token() {
        for (key, token) in NAMED_KEYS {
            assert_eq!(key.token(), token);
            assert_eq!(token.parse::<KeyInput>(), Ok(key));
        }
    }

    #[test]
    fn classification() {
        assert!(KeyInput::Char('q').is_quit());
        assert!(!KeyInput::Char('Q').is_quit());
        assert!(KeyInput::Enter.is_navigation());
        assert!(KeyInput::Enter.is_confirm());
        assert!(KeyInput::Char('Y').is_confirm());
        assert!(!KeyInput::Char('n').is_confirm());
        assert!(KeyInput::Up.is_reverse());
        assert!(!KeyInput::Down.is_reverse());
    }
}
