use super::question::Question;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version tag written into every extracted schema.
///
/// Bump this whenever the positional layout read by the extractor changes, so
/// stored schemas produced under older assumptions can be told apart.
pub const SCHEMA_VERSION: &str = "1.0";

/// Title used when neither the form data nor the document provide one.
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// The decoded, versioned question schema of one form.
///
/// A schema is immutable once extracted. Re-extraction replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    /// Questions in presentation order, which is also submission order.
    pub questions: Vec<Question>,
    #[serde(alias = "raw_data_version")]
    pub schema_version: String,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl fmt::Display for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (schema v{})", self.title, self.schema_version)?;
        for (index, question) in self.questions.iter().enumerate() {
            let marker = if question.required { " *" } else { "" };
            writeln!(
                f,
                "  {}. [{}] {}{}",
                index + 1,
                question.kind,
                question.title,
                marker
            )?;
            if !question.options.is_empty() {
                writeln!(f, "     options: {}", question.options.iter().join(", "))?;
            }
        }
        Ok(())
    }
}
