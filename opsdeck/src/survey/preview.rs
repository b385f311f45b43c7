use std::collections::BTreeMap;

use crossterm::event::KeyCode;
use opsdeck_core::{Component, EventKind};
use opsdeck_widgets::{
    centered_rect, render_form_group, render_modal, FormGroupProps, ModalStyle, MultiSelect,
    MultiSelectProps, Select, SelectProps, TextField, TextFieldProps, TextVariant,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::{initial_values, preview_fields, ControlFlags, FieldSpec, Question, WidgetSpec};

pub const PREVIEW_TITLE: &str = "Survey Preview";
const FOOTER_HINT: &str = "esc close  up/down scroll";

pub struct SurveyPreviewProps<'a, A> {
    pub questions: &'a [Question],
    pub is_open: bool,
    /// Index of the first field shown
    pub scroll: usize,
    pub on_toggle: fn(bool) -> A,
    pub on_scroll: fn(usize) -> A,
}

/// Read-only modal with one disabled control per question
#[derive(Default)]
pub struct SurveyPreview;

impl SurveyPreview {
    pub fn new() -> Self {
        Self
    }

    fn control_height(widget: &WidgetSpec, width: u16) -> u16 {
        match widget {
            WidgetSpec::TextInput { value } => {
                TextField::height_for(value, TextVariant::SingleLine)
            }
            WidgetSpec::TextArea { value } => TextField::height_for(value, TextVariant::MultiLine),
            WidgetSpec::Password { .. } | WidgetSpec::Select { .. } => 3,
            WidgetSpec::MultiSelect { selections, .. } => {
                MultiSelect::height_for(selections, width)
            }
            WidgetSpec::Unsupported { .. } => 1,
        }
    }

    fn field_height(field: &FieldSpec, width: u16) -> u16 {
        let description = u16::from(!field.description.is_empty());
        1 + description + Self::control_height(&field.widget, width)
    }

    fn render_field(
        frame: &mut Frame,
        area: Rect,
        field: &FieldSpec,
        values: &BTreeMap<String, String>,
    ) {
        let mut body = render_form_group(
            frame,
            area,
            FormGroupProps {
                label: &field.label,
                is_required: field.flags.contains(ControlFlags::REQUIRED),
                is_focused: false,
            },
        );

        if !field.description.is_empty() && body.height > 0 {
            let line = Rect { height: 1, ..body };
            frame.render_widget(
                Paragraph::new(field.description.as_str())
                    .style(Style::default().fg(Color::DarkGray)),
                line,
            );
            body.y += 1;
            body.height -= 1;
        }

        let is_disabled = field.flags.contains(ControlFlags::DISABLED);
        match &field.widget {
            WidgetSpec::TextInput { value } | WidgetSpec::TextArea { value } => {
                let variant = if matches!(field.widget, WidgetSpec::TextArea { .. }) {
                    TextVariant::MultiLine
                } else {
                    TextVariant::SingleLine
                };
                let props = TextFieldProps {
                    value,
                    placeholder: "",
                    variant,
                    is_disabled,
                    is_focused: false,
                };
                <TextField as Component<()>>::render(&mut TextField, frame, body, props);
            }
            WidgetSpec::Password { name } => {
                let value = values.get(name).map(String::as_str).unwrap_or_default();
                let props = TextFieldProps {
                    value,
                    placeholder: "",
                    variant: TextVariant::Masked,
                    is_disabled,
                    is_focused: false,
                };
                <TextField as Component<()>>::render(&mut TextField, frame, body, props);
            }
            WidgetSpec::Select { placeholder } => {
                let props = SelectProps {
                    placeholder,
                    is_disabled,
                    is_focused: false,
                };
                <Select as Component<()>>::render(&mut Select, frame, body, props);
            }
            WidgetSpec::MultiSelect {
                selections,
                options,
            } => {
                let props = MultiSelectProps {
                    selections,
                    options,
                    is_read_only: field.flags.contains(ControlFlags::READ_ONLY),
                    is_focused: false,
                };
                <MultiSelect as Component<()>>::render(&mut MultiSelect, frame, body, props);
            }
            WidgetSpec::Unsupported { type_tag } => {
                let notice = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC);
                frame.render_widget(
                    Paragraph::new(format!("Unsupported question type \"{type_tag}\""))
                        .style(notice),
                    body,
                );
            }
        }
    }
}

impl<A> Component<A> for SurveyPreview {
    type Props<'a> = SurveyPreviewProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_open {
            return None;
        }
        let Some(key) = event.as_key() else {
            return None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some((props.on_toggle)(false)),
            KeyCode::Up | KeyCode::Char('k') if props.scroll > 0 => {
                Some((props.on_scroll)(props.scroll - 1))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let fields = preview_fields(props.questions).len();
                if props.scroll + 1 < fields {
                    Some((props.on_scroll)(props.scroll + 1))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !props.is_open {
            return;
        }

        let width = area.width.saturating_mul(4) / 5;
        let modal = centered_rect(width.max(30), area.height, area);
        let inner = render_modal(frame, modal, &ModalStyle::default(), PREVIEW_TITLE);
        if inner.height < 2 {
            return;
        }

        let footer = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let hint = Paragraph::new(FOOTER_HINT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, footer);

        let fields = preview_fields(props.questions);
        if fields.is_empty() {
            frame.render_widget(Paragraph::new("This survey has no questions."), inner);
            return;
        }

        let values = initial_values(props.questions);
        let bottom = footer.y;
        let mut y = inner.y;
        for field in fields.iter().skip(props.scroll) {
            if y >= bottom {
                break;
            }
            let height = Self::field_height(field, inner.width).min(bottom - y);
            let field_area = Rect {
                y,
                height,
                ..inner
            };
            Self::render_field(frame, field_area, field, &values);
            y += height;
        }
    }
}
