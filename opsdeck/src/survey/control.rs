//! Question type to control mapping
//!
//! Everything here is pure: no rendering, no I/O. The preview view and the
//! tests both consume [`WidgetSpec`] / [`FieldSpec`].

use std::collections::{BTreeMap, HashSet};

use bitflags::bitflags;

use super::{Question, QuestionType};

/// Prefix of every preview field id
pub const FIELD_ID_PREFIX: &str = "survey-preview";

/// Control to show for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetSpec {
    /// text, integer and float questions
    TextInput { value: String },
    TextArea { value: String },
    /// The value is read from the form context by `name` and masked
    Password { name: String },
    /// Collapsed single select showing the default as placeholder
    Select { placeholder: String },
    MultiSelect {
        selections: Vec<String>,
        options: Vec<String>,
    },
    /// No control exists for this type tag
    Unsupported { type_tag: String },
}

bitflags! {
    /// Interaction flags of a preview control
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        const DISABLED = 1 << 0;
        const READ_ONLY = 1 << 1;
        const REQUIRED = 1 << 2;
    }
}

/// A question ready to render: id, label, flags and control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub variable: String,
    pub label: String,
    pub description: String,
    pub flags: ControlFlags,
    pub widget: WidgetSpec,
}

/// Problems in a survey definition worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyIssue {
    /// Question at this index has no `variable` and is not shown
    MissingVariable { index: usize },
    DuplicateVariable { variable: String },
    UnsupportedType { variable: String, type_tag: String },
}

/// `{variable: default}` for every question; later duplicates win.
pub fn initial_values(questions: &[Question]) -> BTreeMap<String, String> {
    questions
        .iter()
        .map(|q| (q.variable.clone(), q.default.clone()))
        .collect()
}

/// Empty for an empty string, otherwise one entry per line.
pub fn split_lines(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split('\n').map(str::to_string).collect()
}

pub fn render_control(question: &Question) -> WidgetSpec {
    match &question.question_type {
        QuestionType::Text | QuestionType::Integer | QuestionType::Float => {
            WidgetSpec::TextInput {
                value: question.default.clone(),
            }
        }
        QuestionType::Textarea => WidgetSpec::TextArea {
            value: question.default.clone(),
        },
        QuestionType::Password => WidgetSpec::Password {
            name: question.variable.clone(),
        },
        QuestionType::MultipleChoice => WidgetSpec::Select {
            placeholder: question.default.clone(),
        },
        QuestionType::MultiSelect => WidgetSpec::MultiSelect {
            selections: split_lines(&question.default),
            options: split_lines(&question.choices),
        },
        QuestionType::Other(tag) => WidgetSpec::Unsupported {
            type_tag: tag.clone(),
        },
    }
}

fn id_segment(widget: &WidgetSpec) -> &'static str {
    match widget {
        WidgetSpec::TextInput { .. } => "text",
        WidgetSpec::TextArea { .. } => "textArea",
        WidgetSpec::Password { .. } => "password",
        WidgetSpec::Select { .. } => "multipleChoice",
        WidgetSpec::MultiSelect { .. } => "multiSelect",
        WidgetSpec::Unsupported { .. } => "unsupported",
    }
}

/// Field for `question`, or `None` when it has no variable to bind to.
pub fn field_spec(question: &Question) -> Option<FieldSpec> {
    if question.variable.is_empty() {
        tracing::warn!(
            question = %question.question_name,
            "survey question has no variable, not rendering it"
        );
        return None;
    }

    let widget = render_control(question);
    let mut flags = ControlFlags::DISABLED;
    if matches!(widget, WidgetSpec::MultiSelect { .. }) {
        flags |= ControlFlags::READ_ONLY;
    }
    if question.required {
        flags |= ControlFlags::REQUIRED;
    }

    Some(FieldSpec {
        id: format!(
            "{}-{}-{}",
            FIELD_ID_PREFIX,
            id_segment(&widget),
            question.variable
        ),
        variable: question.variable.clone(),
        label: question.question_name.clone(),
        description: question.question_description.clone(),
        flags,
        widget,
    })
}

/// Fields for every renderable question, in survey order.
pub fn preview_fields(questions: &[Question]) -> Vec<FieldSpec> {
    questions.iter().filter_map(field_spec).collect()
}

/// Check a survey and log each issue found.
pub fn audit_questions(questions: &[Question]) -> Vec<SurveyIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, question) in questions.iter().enumerate() {
        if question.variable.is_empty() {
            tracing::warn!(index, "survey question has no variable, skipping it");
            issues.push(SurveyIssue::MissingVariable { index });
            continue;
        }
        if !seen.insert(question.variable.as_str()) {
            tracing::warn!(variable = %question.variable, "duplicate survey variable");
            issues.push(SurveyIssue::DuplicateVariable {
                variable: question.variable.clone(),
            });
        }
        if let QuestionType::Other(tag) = &question.question_type {
            tracing::warn!(
                variable = %question.variable,
                type_tag = %tag,
                "unsupported survey question type"
            );
            issues.push(SurveyIssue::UnsupportedType {
                variable: question.variable.clone(),
                type_tag: tag.clone(),
            });
        }
    }

    issues
}
