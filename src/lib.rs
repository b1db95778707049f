//! # formchat - Form Schema Extraction and Conversation Flow
//!
//! **formchat** turns a Google Forms page into a versioned question schema and walks a
//! user through that schema one question at a time, the way a chatbot would.
//!
//! ## Core Workflow
//!
//! 1.  **Fetch the Page**: Retrieve the form's HTML with your own HTTP client, or plug
//!     the client into a [`importer::FormImporter`] through the `SourceFetcher` trait.
//! 2.  **Locate the Data**: [`source::parse_public_data`] finds the embedded
//!     `FB_PUBLIC_LOAD_DATA_` literal and decodes it into an untyped tree.
//! 3.  **Extract**: An [`extractor::Extractor`] reads the undocumented positional layout
//!     of that tree into a [`schema::FormSchema`]. Unreadable items are skipped and
//!     reported, never fatal.
//! 4.  **Converse**: [`flow::next_question`] picks the next question from the schema
//!     and the caller's append-only answer history. [`flow::validate_answer`] offers
//!     advisory validation of each answer.
//!
//! ## Quick Start
//!
//! ```rust
//! use formchat::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let raw = json!([
//!         null,
//!         [
//!             null,
//!             [
//!                 [333, "What is your email?", null, 0, [[444, null, 1]]],
//!                 [555, "Preferred contact?", null, 2,
//!                     [[666, [["Email", null, null, null], ["Phone", null, null, null]], 1]]]
//!             ],
//!             null, null, null, null, null, null,
//!             "Contact Form"
//!         ]
//!     ]);
//!
//!     let schema = extract(&raw)?;
//!     assert_eq!(schema.title, "Contact Form");
//!
//!     let mut history: Vec<AnsweredTurn> = Vec::new();
//!     let first = next_question(&schema, &history).expect("form has questions");
//!     assert!(validate_answer(first, Some("alice@example.com")));
//!     history.push(AnsweredTurn::for_question(first, "alice@example.com"));
//!
//!     let second = next_question(&schema, &history).expect("two questions");
//!     assert!(!validate_answer(second, Some("Carrier pigeon")));
//!     history.push(AnsweredTurn::for_question(second, "Email"));
//!
//!     assert!(next_question(&schema, &history).is_none());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extractor;
pub mod flow;
pub mod importer;
pub mod prelude;
pub mod schema;
pub mod source;
