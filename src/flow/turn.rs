use crate::schema::Question;
use serde::{Deserialize, Serialize};

/// One completed step of a conversation.
///
/// Turns are owned by the caller and only ever appended; the flow engine reads
/// nothing but their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredTurn {
    pub question_id: String,
    #[serde(default)]
    pub question_text: String,
    pub answer: String,
}

impl AnsweredTurn {
    pub fn new(
        question_id: impl Into<String>,
        question_text: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            question_text: question_text.into(),
            answer: answer.into(),
        }
    }

    /// Records `answer` against `question`, copying its id and title.
    pub fn for_question(question: &Question, answer: impl Into<String>) -> Self {
        Self::new(question.id.clone(), question.title.clone(), answer)
    }
}
