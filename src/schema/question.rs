use serde::{Deserialize, Serialize};
use std::fmt;

/// The input widget a question expects, decoded from the form's numeric type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    LongText,
    MultipleChoice,
    Dropdown,
    Checkboxes,
    Unknown,
}

impl QuestionKind {
    /// Maps a raw type code with the built-in table. Unlisted codes are `Unknown`.
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => QuestionKind::ShortText,
            1 => QuestionKind::LongText,
            2 => QuestionKind::MultipleChoice,
            3 => QuestionKind::Dropdown,
            4 => QuestionKind::Checkboxes,
            _ => QuestionKind::Unknown,
        }
    }

    /// Kinds whose answers are picked from a list of options.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionKind::MultipleChoice | QuestionKind::Dropdown | QuestionKind::Checkboxes
        )
    }

    /// Kinds that accept exactly one of their options as the answer.
    pub fn requires_option_match(self) -> bool {
        matches!(self, QuestionKind::MultipleChoice | QuestionKind::Dropdown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::ShortText => "short_text",
            QuestionKind::LongText => "long_text",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::Dropdown => "dropdown",
            QuestionKind::Checkboxes => "checkboxes",
            QuestionKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single submittable form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The form's entry id. This is the value answers are submitted under.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl Question {
    /// Creates a free-text question with no options.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            kind,
            options: Vec::new(),
            required: false,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
