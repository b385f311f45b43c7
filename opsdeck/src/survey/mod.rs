//! Survey preview
//!
//! Maps each question's type tag to a disabled control through the pure
//! [`render_control`] / [`field_spec`] functions, and shows the result in a
//! read-only modal ([`SurveyPreview`]). Nothing here mutates the questions or
//! performs I/O.

mod control;
mod preview;
mod question;

pub use control::{
    audit_questions, field_spec, initial_values, preview_fields, render_control, split_lines,
    ControlFlags, FieldSpec, SurveyIssue, WidgetSpec, FIELD_ID_PREFIX,
};
pub use preview::{SurveyPreview, SurveyPreviewProps, PREVIEW_TITLE};
pub use question::{Question, QuestionType, SurveySpec};
