//! UI rendering
//!
//! Converts the structured [`View`] produced by the form controller into
//! ratatui widgets. Pure: no I/O beyond drawing into the given frame.

pub mod theme;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph},
};
use searchform_app::View;
use unicode_width::UnicodeWidthStr;

/// Columns of indentation left of the form.
const LEFT_PADDING: u16 = 2;
/// Blank rows above the form.
const TOP_PADDING: u16 = 1;

/// Render the entire UI.
pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();
    let block = Block::default().padding(Padding::new(LEFT_PADDING, 0, TOP_PADDING, 0));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(to_text(view)).block(block);
    frame.render_widget(paragraph, area);

    if let Some((x, y)) = cursor_position(view, inner) {
        frame.set_cursor_position((x, y));
    }
}

/// Styled text for every line of the view.
fn to_text(view: &View) -> Text<'_> {
    view.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| Span::styled(span.text.as_str(), theme::style(span.style)))
                .collect::<Line<'_>>()
        })
        .collect()
}

/// Screen position of the view's cursor hint, clamped to `area`.
///
/// The hint counts characters; wide characters before the cursor take two
/// cells each. `None` if the view has no cursor or the hinted line is off
/// screen.
fn cursor_position(view: &View, area: Rect) -> Option<(u16, u16)> {
    let hint = view.cursor?;
    if area.width == 0 || hint.line >= usize::from(area.height) {
        return None;
    }
    let line = view.lines.get(hint.line)?;

    let before: String = line.text().chars().take(hint.column).collect();
    let cells = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let column = cells.min(area.width - 1);
    Some((area.x + column, area.y + hint.line as u16))
}
