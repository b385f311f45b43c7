//! Collapsed single-choice select and a read-only multi-select

use opsdeck_core::Component;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DROPDOWN_ARROW: &str = "▾";

fn field_block(is_focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}

/// Props for Select component
pub struct SelectProps<'a> {
    /// Text shown while nothing is chosen
    pub placeholder: &'a str,
    pub is_disabled: bool,
    pub is_focused: bool,
}

/// A closed single-choice dropdown: placeholder text plus an arrow
#[derive(Default)]
pub struct Select;

impl Select {
    pub fn new() -> Self {
        Self
    }
}

impl<A> Component<A> for Select {
    type Props<'a> = SelectProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let text_style = if props.is_disabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = field_block(props.is_focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let arrow_width = DROPDOWN_ARROW.chars().count() as u16;
        let text_area = Rect {
            width: inner.width.saturating_sub(arrow_width + 1),
            ..inner
        };
        frame.render_widget(Paragraph::new(props.placeholder).style(text_style), text_area);

        if inner.width > arrow_width {
            let arrow_area = Rect {
                x: inner.x + inner.width - arrow_width,
                width: arrow_width,
                ..inner
            };
            frame.render_widget(Paragraph::new(DROPDOWN_ARROW), arrow_area);
        }
    }
}

/// Props for MultiSelect component
pub struct MultiSelectProps<'a> {
    pub selections: &'a [String],
    pub options: &'a [String],
    pub is_read_only: bool,
    pub is_focused: bool,
}

/// Selected values shown as chips, with an "n of m selected" summary
#[derive(Default)]
pub struct MultiSelect;

impl MultiSelect {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed for the chips and summary at `width`, including borders.
    pub fn height_for(selections: &[String], width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1) as usize;
        let chips_width: usize = selections
            .iter()
            .map(|s| chip_text(s).chars().count() + 1)
            .sum();
        let chip_rows = chips_width.div_ceil(inner_width).max(1);
        chip_rows as u16 + 1 + 2
    }

    fn summary(props: &MultiSelectProps<'_>) -> String {
        let selected = props
            .selections
            .iter()
            .filter(|s| props.options.contains(*s))
            .count();
        let mut summary = format!("{} of {} selected", selected, props.options.len());
        if props.is_read_only {
            summary.push_str(" (read only)");
        }
        summary
    }
}

fn chip_text(value: &str) -> String {
    format!("[{value}]")
}

impl<A> Component<A> for MultiSelect {
    type Props<'a> = MultiSelectProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chip_style = Style::default().fg(Color::Black).bg(Color::Gray);

        let mut chips: Vec<Span> = Vec::with_capacity(props.selections.len() * 2);
        for selection in props.selections {
            chips.push(Span::styled(chip_text(selection), chip_style));
            chips.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(chips),
            Line::styled(Self::summary(&props), Style::default().fg(Color::DarkGray)),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(field_block(props.is_focused));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::testing::RenderHarness;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_shows_placeholder_and_arrow() {
        let mut render = RenderHarness::new(30, 3);
        let mut select = Select::new();

        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            let props = SelectProps {
                placeholder: "Choose an option",
                is_disabled: true,
                is_focused: false,
            };
            <Select as Component<()>>::render(&mut select, frame, area, props);
        });

        let middle = output.lines().nth(1).unwrap_or_default();
        assert!(middle.contains("Choose an option"));
        assert!(middle.contains("▾"));
    }

    #[test]
    fn test_multi_select_chips_and_summary() {
        let mut render = RenderHarness::new(40, 5);
        let mut multi = MultiSelect::new();
        let selections = strings(&["a", "b"]);
        let options = strings(&["a", "b", "c"]);

        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            let props = MultiSelectProps {
                selections: &selections,
                options: &options,
                is_read_only: true,
                is_focused: false,
            };
            <MultiSelect as Component<()>>::render(&mut multi, frame, area, props);
        });

        assert!(output.contains("[a] [b]"));
        assert!(!output.contains("[c]"));
        assert!(output.contains("2 of 3 selected (read only)"));
    }

    #[test]
    fn test_multi_select_empty() {
        let mut render = RenderHarness::new(40, 5);
        let mut multi = MultiSelect::new();

        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            let props = MultiSelectProps {
                selections: &[],
                options: &[],
                is_read_only: false,
                is_focused: false,
            };
            <MultiSelect as Component<()>>::render(&mut multi, frame, area, props);
        });

        assert!(output.contains("0 of 0 selected"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_multi_select_height() {
        assert_eq!(MultiSelect::height_for(&strings(&["a", "b"]), 40), 4);
        assert_eq!(MultiSelect::height_for(&[], 40), 4);
        assert_eq!(MultiSelect::height_for(&strings(&["long-value"; 3]), 12), 7);
    }
}
