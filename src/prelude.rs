//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! formchat crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use formchat::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let html = std::fs::read_to_string("path/to/form.html")?;
//! let schema = import_html(&html, None)?;
//!
//! let mut history: Vec<AnsweredTurn> = Vec::new();
//! while let Some(question) = next_question(&schema, &history) {
//!     history.push(AnsweredTurn::for_question(question, "an answer"));
//! }
//! assert!(flow_state(&schema, &history).is_complete());
//! # Ok(())
//! # }
//! ```

// Extraction
pub use crate::extractor::{Extraction, Extractor, MalformedItem, extract};
pub use crate::importer::{FormImporter, SourceFetcher, import_html};
pub use crate::source::{NodeExt, RawNode, is_form_url, locate_title, parse_public_data};

// Schema model
pub use crate::schema::{FormSchema, Question, QuestionKind, SCHEMA_VERSION};

// Conversation flow
pub use crate::flow::{
    AnsweredTurn, FlowState, Progress, QuestionPrompt, flow_state, next_prompt, next_question,
    progress, validate_answer,
};

// Error types
pub use crate::error::{ExtractionError, FetchError, ImportError, SchemaStoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
