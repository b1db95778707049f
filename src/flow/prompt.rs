use crate::schema::{Question, QuestionKind};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a question has no description of its own.
pub const DEFAULT_PLACEHOLDER: &str = "Type your answer...";

/// The presentation view of a [`Question`], as consumed by chat front ends.
///
/// Field names differ from [`Question`] on purpose: existing consumers expect
/// `text` and `placeholder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub required: bool,
    pub placeholder: String,
}

impl From<&Question> for QuestionPrompt {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: question.title.clone(),
            kind: question.kind,
            options: question.options.clone(),
            required: question.required,
            placeholder: question
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_PLACEHOLDER)
                .to_string(),
        }
    }
}
