//! Read-only text field (single line, multi line, or masked)

use opsdeck_core::Component;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Glyph used for masked values
pub const MASK_CHAR: char = '•';

/// How the field presents its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    #[default]
    SingleLine,
    /// Wraps and keeps line breaks
    MultiLine,
    /// Shows one mask glyph per character, never the value
    Masked,
}

/// Props for TextField component
pub struct TextFieldProps<'a> {
    pub value: &'a str,
    /// Shown dimmed when `value` is empty
    pub placeholder: &'a str,
    pub variant: TextVariant,
    pub is_disabled: bool,
    pub is_focused: bool,
}

/// Bordered text display. Accepts no input; it only renders its props.
#[derive(Default)]
pub struct TextField;

impl TextField {
    pub fn new() -> Self {
        Self
    }

    /// Rows the field needs for `value`, including borders.
    pub fn height_for(value: &str, variant: TextVariant) -> u16 {
        let content = match variant {
            TextVariant::MultiLine => value.lines().count().clamp(1, 4) as u16,
            TextVariant::SingleLine | TextVariant::Masked => 1,
        };
        content + 2
    }

    fn display_text(props: &TextFieldProps<'_>) -> String {
        if props.value.is_empty() {
            return props.placeholder.to_string();
        }
        match props.variant {
            TextVariant::Masked => props.value.chars().map(|_| MASK_CHAR).collect(),
            TextVariant::SingleLine => props.value.lines().next().unwrap_or_default().to_string(),
            TextVariant::MultiLine => props.value.to_string(),
        }
    }
}

impl<A> Component<A> for TextField {
    type Props<'a> = TextFieldProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut style = if props.value.is_empty() || props.is_disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        if props.is_disabled {
            style = style.add_modifier(Modifier::ITALIC);
        }

        let border_style = if props.is_focused && !props.is_disabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut paragraph = Paragraph::new(Self::display_text(&props))
            .style(style)
            .block(Block::bordered().border_style(border_style));
        if props.variant == TextVariant::MultiLine {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }

        frame.render_widget(paragraph, area);
    }
}
