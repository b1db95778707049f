//! The conversation flow engine.
//!
//! Every function here is pure. The position in a conversation is never stored:
//! it is derived on each call from the number of answered turns, so replaying the
//! same history always gives the same answer and a history restored from storage
//! needs no extra state flag.

use crate::schema::{FormSchema, Question};
use std::fmt;

mod prompt;
mod turn;

pub use prompt::{DEFAULT_PLACEHOLDER, QuestionPrompt};
pub use turn::AnsweredTurn;

/// Where a conversation stands, derived from its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for the answer to the question at this index.
    AwaitingQuestion(usize),
    Completed,
}

impl FlowState {
    pub fn is_complete(self) -> bool {
        matches!(self, FlowState::Completed)
    }
}

/// How far a conversation has got through its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn remaining(self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    pub fn is_complete(self) -> bool {
        self.answered >= self.total
    }

    /// Fraction answered, in `0.0..=1.0`. An empty schema counts as done.
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.answered, self.total)
    }
}

/// The question to ask next, or `None` once every question has an answer.
pub fn next_question<'s>(
    schema: &'s FormSchema,
    history: &[AnsweredTurn],
) -> Option<&'s Question> {
    schema.questions.get(history.len())
}

/// [`next_question`] rendered for presentation.
pub fn next_prompt(schema: &FormSchema, history: &[AnsweredTurn]) -> Option<QuestionPrompt> {
    next_question(schema, history).map(QuestionPrompt::from)
}

pub fn flow_state(schema: &FormSchema, history: &[AnsweredTurn]) -> FlowState {
    if history.len() < schema.questions.len() {
        FlowState::AwaitingQuestion(history.len())
    } else {
        FlowState::Completed
    }
}

/// Answers beyond the schema's length are not counted.
pub fn progress(schema: &FormSchema, history: &[AnsweredTurn]) -> Progress {
    let total = schema.questions.len();
    Progress {
        answered: history.len().min(total),
        total,
    }
}

/// Advisory check of a single answer.
///
/// A required question rejects an absent or empty answer. Single-choice kinds
/// reject any non-empty answer that is not exactly one of the options. Everything
/// else is accepted; callers decide whether to re-prompt.
pub fn validate_answer(question: &Question, answer: Option<&str>) -> bool {
    let answer = answer.unwrap_or_default();
    if answer.is_empty() {
        return !question.required;
    }
    if question.kind.requires_option_match() {
        return question.options.iter().any(|option| option == answer);
    }
    true
}
