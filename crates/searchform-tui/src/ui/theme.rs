//! Colors for semantic style tags.

use ratatui::style::{Color, Modifier, Style};
use searchform_app::StyleTag;

/// Accent for the focused prompt, text and button.
pub const FOCUSED: Color = Color::Indexed(205);

/// Dimmed color for blurred buttons and placeholders.
pub const BLURRED: Color = Color::Indexed(240);

/// Terminal style for a tag.
pub fn style(tag: StyleTag) -> Style {
    let base = Style::default();
    match tag {
        StyleTag::Plain | StyleTag::Prompt | StyleTag::Label | StyleTag::Text => base,
        StyleTag::Header => base.add_modifier(Modifier::BOLD),
        StyleTag::Hint => base.fg(Color::DarkGray),
        StyleTag::FocusedPrompt | StyleTag::FocusedText | StyleTag::FocusedButton => {
            base.fg(FOCUSED)
        },
        StyleTag::Placeholder | StyleTag::Button => base.fg(BLURRED),
    }
}
