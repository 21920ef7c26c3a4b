//! Focus ring over a group of fields.
//!
//! A [`FieldSet`] holds an ordered list of [`Field`]s plus one virtual submit
//! position. Positions `0..len` are the fields and position `len` is submit,
//! forming a ring of `len + 1` slots that navigation keys walk in either
//! direction.
//!
//! # Invariants
//!
//! - At most one position is focused, and it is always `focus_index`.
//! - Per-field focus flags are re-derived from `focus_index` after every
//!   change rather than toggled, so a stale flag can never survive a move.

use crate::{CursorHint, Field, KeyInput, Line, Span, StyleTag, View};

/// Prompt glyph rendered before every field.
const PROMPT: &str = "> ";

/// The position currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Field at this index.
    Field(usize),
    /// The submit slot.
    Submit,
}

/// Ordered fields plus a submit slot, with a single focus position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
    /// In `0..=fields.len()`; `fields.len()` is the submit slot.
    focus_index: usize,
    submit_label: String,
}

impl FieldSet {
    /// Create a field set with focus on the first position.
    ///
    /// With no fields, the first position is the submit slot.
    pub fn new(fields: Vec<Field>, submit_label: impl Into<String>) -> Self {
        let mut set = Self { fields, focus_index: 0, submit_label: submit_label.into() };
        set.derive_focus();
        set
    }

    /// Process a key.
    ///
    /// Navigation keys (`tab`, `shift+tab`, `enter`, `up`, `down`) move focus
    /// around the ring. Everything else goes to the focused field and is
    /// dropped when the submit slot has focus. Returns `true` if anything
    /// changed.
    pub fn dispatch_key(&mut self, key: KeyInput) -> bool {
        if key.is_navigation() {
            self.cycle(key.is_reverse());
            return true;
        }

        match self.focused_field_mut() {
            Some(field) => field.handle_key(key),
            None => {
                tracing::trace!(key = %key, "no focused field, dropping key");
                false
            },
        }
    }

    /// Insert literal text into the focused field.
    ///
    /// Returns the number of characters accepted.
    pub fn insert_str(&mut self, text: &str) -> usize {
        self.focused_field_mut().map_or(0, |field| field.insert_str(text))
    }

    /// Move focus one slot forward, or backward if `reverse`, wrapping at
    /// both ends.
    pub fn cycle(&mut self, reverse: bool) {
        let ring = self.ring_size();
        let current = self.focus_index % ring;
        self.focus_index =
            if reverse { (current + ring - 1) % ring } else { (current + 1) % ring };
        self.derive_focus();
    }

    /// Clear every buffer and focus the first position.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.focus_index = 0;
        self.derive_focus();
    }

    /// Clear every buffer, leaving focus where it is.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Index of the focused position (`len()` means submit).
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// The focused position.
    pub fn focus_target(&self) -> FocusTarget {
        if self.focus_index < self.fields.len() {
            FocusTarget::Field(self.focus_index)
        } else {
            FocusTarget::Submit
        }
    }

    /// Submit slot has focus.
    pub fn is_submit_focused(&self) -> bool {
        self.focus_target() == FocusTarget::Submit
    }

    /// Number of ordinary fields (excluding submit).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field set has only the submit slot.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field at `index`. `None` if out of range.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Current content of the field at `index`, or empty if out of range.
    pub fn value(&self, index: usize) -> &str {
        self.field(index).map_or("", Field::value)
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Render each field on its own line, a blank line, then the submit
    /// button.
    pub fn render(&self) -> View {
        let mut view = View::default();

        for (index, field) in self.fields.iter().enumerate() {
            let (line, cursor_column) = render_field(field);
            if field.is_focused() {
                view.cursor = Some(CursorHint { line: index, column: cursor_column });
            }
            view.push(line);
        }

        view.push(Line::blank());

        let button_style =
            if self.is_submit_focused() { StyleTag::FocusedButton } else { StyleTag::Button };
        view.push(Line::from(vec![
            Span::plain("[ "),
            Span::new(self.submit_label.clone(), button_style),
            Span::plain(" ]"),
        ]));

        view
    }

    fn ring_size(&self) -> usize {
        self.fields.len() + 1
    }

    fn focused_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focus_index)
    }

    /// Mark exactly the field at `focus_index` as focused.
    fn derive_focus(&mut self) {
        let focus_index = self.focus_index;
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(index == focus_index);
        }
    }
}

/// Render one field line. Returns the line and the cursor column within it.
fn render_field(field: &Field) -> (Line, usize) {
    let focused = field.is_focused();
    let mut spans = Vec::with_capacity(3);
    let mut column = PROMPT.chars().count();

    spans.push(Span::new(
        PROMPT,
        if focused { StyleTag::FocusedPrompt } else { StyleTag::Prompt },
    ));

    if !field.label().is_empty() {
        let label = format!("{}: ", field.label());
        column += label.chars().count();
        spans.push(Span::new(label, StyleTag::Label));
    }

    if field.is_empty() {
        if !field.placeholder().is_empty() {
            spans.push(Span::new(field.placeholder(), StyleTag::Placeholder));
        }
    } else {
        spans.push(Span::new(
            field.value(),
            if focused { StyleTag::FocusedText } else { StyleTag::Text },
        ));
    }

    (Line::from(spans), column + field.cursor())
}
