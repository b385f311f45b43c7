//! Label wrapper for a form control

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Props for [`render_form_group`]
pub struct FormGroupProps<'a> {
    /// Label text, rendered verbatim
    pub label: &'a str,
    /// Append a required marker after the label
    pub is_required: bool,
    /// Highlight the label
    pub is_focused: bool,
}

/// Marker appended to required labels
pub const REQUIRED_MARKER: &str = " *";

/// Render the label on the first row of `area` and return the rest.
///
/// The control belonging to the group goes into the returned area.
pub fn render_form_group(frame: &mut Frame, area: Rect, props: FormGroupProps<'_>) -> Rect {
    if area.height == 0 {
        return area;
    }

    let label_style = if props.is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(props.label, label_style)];
    if props.is_required {
        spans.push(Span::styled(REQUIRED_MARKER, Style::default().fg(Color::Red)));
    }

    let label_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(spans)), label_area);

    Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    }
}
