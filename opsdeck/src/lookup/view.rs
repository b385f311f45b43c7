use crossterm::event::KeyCode;
use opsdeck_core::{Component, EventKind};
use opsdeck_widgets::{render_form_group, FormGroupProps, SelectList, SelectListProps};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::LookupState;

pub struct CredentialLookupViewProps<'a, A> {
    pub state: &'a LookupState,
    pub is_focused: bool,
    pub on_highlight: fn(usize) -> A,
    pub on_select: fn(usize) -> A,
    pub on_clear: fn() -> A,
    pub on_blur: fn() -> A,
}

/// Labelled credential picker
///
/// Keys: up/down/j/k/home/end move, enter selects, backspace/delete clears,
/// tab leaves the field.
#[derive(Default)]
pub struct CredentialLookupView {
    list: SelectList,
}

impl CredentialLookupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows the view wants for `state`.
    pub fn height_for(state: &LookupState) -> u16 {
        // label + bordered list + status line
        1 + state.options.len().max(1) as u16 + 2 + 1
    }

    fn status_line(state: &LookupState) -> Option<(String, Style)> {
        if state.is_loading {
            return Some((
                "Loading credentials...".into(),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(error) = &state.error {
            return Some((format!("Error: {error}"), Style::default().fg(Color::Red)));
        }
        if state.is_truncated() {
            return Some((
                format!("showing {} of {}", state.options.len(), state.count),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None
    }

    fn list_props<'a, A>(
        state: &'a LookupState,
        items: &'a [String],
        props: &CredentialLookupViewProps<'_, A>,
    ) -> SelectListProps<'a, A> {
        SelectListProps {
            items,
            highlighted: state.highlighted,
            selected: state.selected_index(),
            is_focused: props.is_focused,
            show_border: true,
            on_highlight: props.on_highlight,
            on_select: props.on_select,
        }
    }
}

impl<A> Component<A> for CredentialLookupView {
    type Props<'a> = CredentialLookupViewProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let Some(key) = event.as_key().filter(|_| props.is_focused) else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Backspace | KeyCode::Delete => vec![(props.on_clear)()],
            KeyCode::Tab => vec![(props.on_blur)()],
            _ => {
                let names = props.state.option_names();
                let list_props = Self::list_props(props.state, &names, &props);
                self.list.handle_event(event, list_props).into_iter().collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let body = render_form_group(
            frame,
            area,
            FormGroupProps {
                label: &state.label,
                is_required: state.required,
                is_focused: props.is_focused,
            },
        );

        let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]);
        let [list_area, status_area] = layout.areas(body);

        if state.options.is_empty() {
            let text = if state.is_loading {
                ""
            } else {
                "No credentials found"
            };
            let dim = Style::default().fg(Color::DarkGray);
            let placeholder = Paragraph::new(text)
                .style(dim)
                .block(Block::bordered().border_style(dim));
            frame.render_widget(placeholder, list_area);
        } else {
            let names = state.option_names();
            let list_props = Self::list_props(state, &names, &props);
            self.list.render(frame, list_area, list_props);
        }

        if let Some((text, style)) = Self::status_line(state) {
            frame.render_widget(Paragraph::new(text).style(style), status_area);
        }
    }
}
