//! Structured render output.
//!
//! The core renders to plain data: lines of [`Span`]s tagged with a semantic
//! [`StyleTag`]. Frontends map tags to colors and modifiers, so nothing here
//! depends on a terminal or styling library.

/// Semantic style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Unstyled text.
    Plain,
    /// Form heading.
    Header,
    /// Key hints and status footer.
    Hint,
    /// Prompt glyph of an unfocused field.
    Prompt,
    /// Prompt glyph of the focused field.
    FocusedPrompt,
    /// Field label.
    Label,
    /// Content of an unfocused field.
    Text,
    /// Content of the focused field.
    FocusedText,
    /// Placeholder shown in an empty field.
    Placeholder,
    /// Unfocused submit button label.
    Button,
    /// Focused submit button label.
    FocusedButton,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text content.
    pub text: String,
    /// Semantic style.
    pub style: StyleTag,
}

impl Span {
    /// Create a styled span.
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self { text: text.into(), style }
    }

    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleTag::Plain)
    }
}

/// One rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Spans from left to right.
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated span text without styles.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// Where the focused field's text cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHint {
    /// Line index within the view.
    pub line: usize,
    /// Column in characters from the start of the line.
    pub column: usize,
}

/// A full frame of render output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    /// Lines from top to bottom.
    pub lines: Vec<Line>,
    /// Text cursor of the focused field. `None` if no field has focus.
    pub cursor: Option<CursorHint>,
}

impl View {
    /// Append a line.
    pub fn push(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into());
    }

    /// Append all lines of `other`, carrying its cursor hint along.
    pub fn append(&mut self, other: View) {
        let offset = self.lines.len();
        if let Some(hint) = other.cursor {
            self.cursor = Some(CursorHint { line: hint.line + offset, column: hint.column });
        }
        self.lines.extend(other.lines);
    }

    /// Text of every line joined with newlines, without styles.
    pub fn to_plain_text(&self) -> String {
        self.lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_offsets_cursor() {
        let mut view = View::default();
        view.push(Span::plain("header"));

        let mut inner = View::default();
        inner.push(Span::plain("> abc"));
        inner.cursor = Some(CursorHint { line: 0, column: 5 });

        view.append(inner);
        assert_eq!(view.cursor, Some(CursorHint { line: 1, column: 5 }));
        assert_eq!(view.to_plain_text(), "header\n> abc");
    }

    #[test]
    fn blank_line_has_no_text() {
        assert_eq!(Line::blank().text(), "");
    }
}
