//! Survey definitions as stored by the console

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Declared type of a survey question
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    #[default]
    Text,
    Integer,
    Float,
    Textarea,
    Password,
    MultipleChoice,
    MultiSelect,
    /// Any tag this crate has no control for, kept verbatim
    Other(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Integer => "integer",
            QuestionType::Float => "float",
            QuestionType::Textarea => "textarea",
            QuestionType::Password => "password",
            QuestionType::MultipleChoice => "multiplechoice",
            QuestionType::MultiSelect => "multiselect",
            QuestionType::Other(tag) => tag,
        }
    }
}

impl From<&str> for QuestionType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => QuestionType::Text,
            "integer" => QuestionType::Integer,
            "float" => QuestionType::Float,
            "textarea" => QuestionType::Textarea,
            "password" => QuestionType::Password,
            "multiplechoice" => QuestionType::MultipleChoice,
            "multiselect" => QuestionType::MultiSelect,
            other => QuestionType::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        QuestionType::from(tag.as_str())
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One survey question
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Question {
    /// Form field key, unique within a survey
    #[serde(default)]
    pub variable: String,
    /// Label
    #[serde(default)]
    pub question_name: String,
    #[serde(default)]
    pub question_description: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default, deserialize_with = "text_or_number")]
    pub default: String,
    #[serde(default)]
    pub required: bool,
    /// Newline-delimited options for the choice types
    #[serde(default, deserialize_with = "lines_or_list")]
    pub choices: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Question {
    pub fn new(variable: impl Into<String>, question_type: impl Into<QuestionType>) -> Self {
        Self {
            variable: variable.into(),
            question_type: question_type.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, question_name: impl Into<String>) -> Self {
        self.question_name = question_name.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_choices(mut self, choices: impl Into<String>) -> Self {
        self.choices = choices.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A survey attached to a job template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveySpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub spec: Vec<Question>,
}

// Integer and float questions often carry numeric defaults.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lines_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_types() {
        let q: Question =
            serde_json::from_str(r#"{"variable": "v", "type": "multiselect"}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::MultiSelect);

        let q: Question =
            serde_json::from_str(r#"{"variable": "v", "type": "datetime"}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::Other("datetime".into()));
        assert_eq!(q.question_type.to_string(), "datetime");
    }

    #[test]
    fn test_numeric_default() {
        let q: Question = serde_json::from_str(
            r#"{"variable": "n", "type": "integer", "default": 5, "min": 0, "max": 10}"#,
        )
        .unwrap();
        assert_eq!(q.default, "5");
        assert_eq!(q.min, Some(0.0));
        assert_eq!(q.max, Some(10.0));
    }

    #[test]
    fn test_choices_as_list() {
        let q: Question = serde_json::from_str(
            r#"{"variable": "c", "type": "multiplechoice", "choices": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(q.choices, "a\nb");
    }

    #[test]
    fn test_missing_fields_default() {
        let q: Question = serde_json::from_str(r#"{"type": "text"}"#).unwrap();
        assert!(q.variable.is_empty());
        assert!(q.default.is_empty());
        assert!(!q.required);
    }

    #[test]
    fn test_type_serializes_as_tag() {
        let q = Question::new("region", "textarea");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "textarea");
    }

    #[test]
    fn test_survey_spec() {
        let survey: SurveySpec = serde_json::from_str(
            r#"{"name": "Deploy", "description": "", "spec": [
                {"variable": "region", "question_name": "Region", "type": "text",
                 "default": "us-east-1", "required": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(survey.spec.len(), 1);
        assert_eq!(survey.spec[0].question_name, "Region");
        assert!(survey.spec[0].required);
    }
}
