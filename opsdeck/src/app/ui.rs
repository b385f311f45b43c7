//! Layout and key routing for the console screen

use crossterm::event::{KeyCode, KeyModifiers};
use opsdeck_core::{Component, EventKind, EventOutcome};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Action, AppState, Focus};
use crate::lookup::{CredentialLookupView, CredentialLookupViewProps, LookupAction};
use crate::survey::{SurveyPreview, SurveyPreviewProps};

#[derive(Default)]
pub struct AppUi {
    lookup: CredentialLookupView,
    preview: SurveyPreview,
}

fn lookup_props(state: &AppState) -> CredentialLookupViewProps<'_, Action> {
    CredentialLookupViewProps {
        state: &state.lookup,
        is_focused: state.focus == Focus::Lookup && !state.preview_open,
        on_highlight: |i| Action::Lookup(LookupAction::LookupHighlight(i)),
        on_select: |i| Action::Lookup(LookupAction::LookupSelect(i)),
        on_clear: || Action::Lookup(LookupAction::LookupClear),
        on_blur: || Action::Lookup(LookupAction::LookupBlur),
    }
}

fn preview_props(state: &AppState) -> SurveyPreviewProps<'_, Action> {
    SurveyPreviewProps {
        questions: &state.survey.spec,
        is_open: state.preview_open,
        scroll: state.preview_scroll,
        on_toggle: Action::PreviewToggle,
        on_scroll: Action::PreviewScroll,
    }
}

impl AppUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lookup_height = CredentialLookupView::height_for(&state.lookup);
        let [header, lookup, value, survey, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(lookup_height),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(header_line(state)), header);
        self.lookup.render(frame, lookup, lookup_props(state));
        frame.render_widget(Paragraph::new(value_line(state)), value);
        render_survey_panel(frame, survey, state);
        frame.render_widget(Paragraph::new(help_line()), help);

        self.preview.render(frame, area, preview_props(state));
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        let EventKind::Key(key) = event else {
            return EventOutcome::ignored().with_render();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return EventOutcome::action(Action::Quit);
        }

        if state.preview_open {
            let actions = self.preview.handle_event(event, preview_props(state));
            return EventOutcome::from_actions(actions);
        }

        match key.code {
            KeyCode::Char('q') => return EventOutcome::action(Action::Quit),
            KeyCode::Char('p') => return EventOutcome::action(Action::PreviewToggle(true)),
            KeyCode::Char('t') => return EventOutcome::action(Action::CredentialTypeCycle),
            KeyCode::Char('r') => {
                return EventOutcome::action(Action::Lookup(LookupAction::LookupRefresh))
            }
            KeyCode::BackTab => return EventOutcome::action(Action::FocusNext),
            _ => {}
        }

        match state.focus {
            Focus::Lookup => {
                EventOutcome::from_actions(self.lookup.handle_event(event, lookup_props(state)))
            }
            Focus::Survey => match key.code {
                KeyCode::Enter => EventOutcome::action(Action::PreviewToggle(true)),
                KeyCode::Tab => EventOutcome::action(Action::FocusNext),
                _ => EventOutcome::ignored(),
            },
        }
    }
}

fn header_line(state: &AppState) -> Line<'static> {
    let type_id = state
        .current_type()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".into());
    Line::from(vec![
        Span::styled(
            " opsdeck ",
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw("  credential type "),
        Span::styled(type_id, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(
                " ({}/{})",
                state.type_index + 1,
                state.credential_types.len().max(1)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn value_line(state: &AppState) -> Line<'static> {
    if state.is_missing_required() {
        return Line::styled("This field is required.", Style::default().fg(Color::Red));
    }
    match &state.credential {
        Some(credential) => Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                credential.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (id {})", credential.id),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::styled("Nothing selected", Style::default().fg(Color::DarkGray)),
    }
}

fn render_survey_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let border = if state.focus == Focus::Survey {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if state.survey.name.is_empty() {
        " Survey ".to_string()
    } else {
        format!(" Survey: {} ", state.survey.name)
    };

    let mut lines = Vec::new();
    if !state.survey.description.is_empty() {
        lines.push(Line::raw(state.survey.description.clone()));
    }
    lines.push(Line::styled(
        format!("{} question(s)", state.survey.spec.len()),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::from(vec![
        Span::styled("p", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" preview", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        ),
        area,
    );
}

fn help_line() -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan).bold());
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    Line::from(vec![
        key(" enter"),
        text(" select  "),
        key("del"),
        text(" clear  "),
        key("tab"),
        text(" next  "),
        key("t"),
        text(" type  "),
        key("r"),
        text(" refresh  "),
        key("p"),
        text(" preview  "),
        key("q"),
        text(" quit "),
    ])
}
