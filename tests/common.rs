//! Common test utilities for building form data and schemas.
use formchat::prelude::*;
use serde_json::{Value, json};

/// Wraps a list of form items in the positional envelope the extractor expects.
///
/// Layout: `[null, [null, items, null x6, title]]`
#[allow(dead_code)]
pub fn form_data(items: Value, title: Value) -> Value {
    json!([
        null,
        [null, items, null, null, null, null, null, null, title]
    ])
}

/// The two-item contact form: a short text email question and a
/// multiple choice question with "Email" and "Phone".
#[allow(dead_code)]
pub fn create_contact_form() -> Value {
    form_data(
        json!([
            [333, "What is your email?", null, 0, [[444, null, 0]]],
            [
                555,
                "Preferred contact?",
                null,
                2,
                [[
                    666,
                    [["Email", null, null, null], ["Phone", null, null, null]],
                    1
                ]]
            ]
        ]),
        json!("Test Form Title"),
    )
}

/// Embeds form data in a minimal page the way Google Forms serves it.
#[allow(dead_code)]
pub fn form_page(data: &Value, page_title: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>\
         <script type=\"text/javascript\" nonce=\"abc\">var FB_PUBLIC_LOAD_DATA_ = {};\
         </script></body></html>",
        page_title, data
    )
}

/// Two required questions: a name and a color choice.
#[allow(dead_code)]
pub fn create_simple_schema() -> FormSchema {
    FormSchema::new(
        "Simple",
        vec![
            Question::new("q1", "What's your name?", QuestionKind::ShortText).required(true),
            Question::new("q2", "Choose a color", QuestionKind::MultipleChoice)
                .with_options(["Red", "Blue"])
                .required(true),
        ],
    )
}

#[allow(dead_code)]
pub fn turn(question_id: &str, answer: &str) -> AnsweredTurn {
    AnsweredTurn::new(question_id, "", answer)
}
