//! Single-line text field.
//!
//! A [`Field`] owns its text buffer and cursor. Whether it is focused is
//! decided by the owning [`crate::FieldSet`]; an unfocused field ignores edit
//! keys entirely.

use crate::{FieldConfig, KeyInput};

/// One editable text entry.
///
/// The buffer never holds more than `max_length` characters and never holds
/// control characters, so every field renders on exactly one line. Characters
/// that would exceed the limit, and control characters, are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Static label text.
    label: String,
    /// Text shown while the buffer is empty.
    placeholder: String,
    /// Current content.
    buffer: String,
    /// Cursor position as a character index into `buffer`.
    cursor: usize,
    /// Maximum content length in characters.
    max_length: usize,
    /// Set by the owning field set.
    focused: bool,
}

impl Field {
    /// Create an empty, unfocused field.
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>, max_length: usize) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            buffer: String::new(),
            cursor: 0,
            max_length,
            focused: false,
        }
    }

    /// Create an empty, unfocused field from its configuration.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.label.clone(), config.placeholder.clone(), config.max_length)
    }

    /// Apply an edit key.
    ///
    /// Returns `true` if the buffer or cursor changed. Unfocused fields and
    /// non-edit keys are no-ops.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        if !self.focused {
            return false;
        }

        match key {
            KeyInput::Char(c) => self.insert(c),
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            },
            KeyInput::Delete => {
                if self.cursor >= self.len() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            },
            KeyInput::Left => self.move_cursor(self.cursor.saturating_sub(1)),
            KeyInput::Right => self.move_cursor((self.cursor + 1).min(self.len())),
            KeyInput::Home => self.move_cursor(0),
            KeyInput::End => self.move_cursor(self.len()),
            KeyInput::Enter
            | KeyInput::Tab
            | KeyInput::BackTab
            | KeyInput::Esc
            | KeyInput::CtrlC
            | KeyInput::Up
            | KeyInput::Down => false,
        }
    }

    /// Insert text at the cursor, one character at a time.
    ///
    /// Control characters (newlines, tabs, escape sequences) are skipped.
    /// Stops at the length limit. Returns the number of characters inserted.
    pub fn insert_str(&mut self, text: &str) -> usize {
        if !self.focused {
            return 0;
        }
        text.chars().filter(|c| !c.is_control()).take_while(|&c| self.insert(c)).count()
    }

    /// Clear the buffer and move the cursor to the start.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Static label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Placeholder text shown while the buffer is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current content.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Content length in characters.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Buffer has no content.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Maximum content length in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Field currently receives edit keys.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn insert(&mut self, c: char) -> bool {
        if c.is_control() {
            tracing::trace!(label = %self.label, "control character, dropping {c:?}");
            return false;
        }
        if self.len() >= self.max_length {
            tracing::trace!(label = %self.label, max_length = self.max_length, "input overflow, dropping {c:?}");
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        true
    }

    fn move_cursor(&mut self, to: usize) -> bool {
        let moved = to != self.cursor;
        self.cursor = to;
        moved
    }

    /// Byte offset of the character at `index`, or the buffer end.
    fn byte_offset(&self, index: usize) -> usize {
        self.buffer.char_indices().nth(index).map_or(self.buffer.len(), |(at, _)| at)
    }
}
