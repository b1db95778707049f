use crate::error::ExtractionError;
use crate::schema::{DEFAULT_FORM_TITLE, FormSchema, QuestionKind};
use crate::source::{NodeExt, RawNode};
use ahash::AHashMap;
use tracing::{debug, warn};

mod item;

use item::{ItemOutcome, parse_item};

// Empirically known paths in the decoded form data.
const FORM_BODY: usize = 1;
const ITEM_LIST: [usize; 2] = [FORM_BODY, 1];
const FORM_TITLE: [usize; 2] = [FORM_BODY, 8];

/// A form item that was skipped because its shape could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedItem {
    /// Position of the item in the form's item list.
    pub index: usize,
    pub reason: String,
}

/// The result of [`Extractor::extract_with_report`].
#[derive(Debug, Clone)]
pub struct Extraction {
    pub schema: FormSchema,
    pub skipped: Vec<MalformedItem>,
}

/// The built-in type-code table.
pub(crate) fn default_kinds() -> AHashMap<u64, QuestionKind> {
    let mut kinds = AHashMap::new();
    for code in 0..=4 {
        kinds.insert(code, QuestionKind::from_code(code));
    }
    kinds
}

/// Decodes the positional form data into a [`FormSchema`].
///
/// Extraction is strict about the root of the tree and lenient about everything
/// below it: an unreadable item is skipped and recorded, never fatal.
pub struct Extractor {
    kinds: AHashMap<u64, QuestionKind>,
    document_title: Option<String>,
}

pub struct ExtractorBuilder {
    kinds: AHashMap<u64, QuestionKind>,
    document_title: Option<String>,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self {
            kinds: default_kinds(),
            document_title: None,
        }
    }

    /// Sets the title used when the form data carries none, e.g. the page `<title>`.
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    /// Maps an additional raw type code to a question kind.
    pub fn with_type_mapping(mut self, code: u64, kind: QuestionKind) -> Self {
        self.kinds.insert(code, kind);
        self
    }

    pub fn build(self) -> Extractor {
        Extractor {
            kinds: self.kinds,
            document_title: self.document_title,
        }
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        ExtractorBuilder::new().build()
    }
}

impl Extractor {
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn extract(&self, raw: &RawNode) -> Result<FormSchema, ExtractionError> {
        self.extract_with_report(raw).map(|extraction| extraction.schema)
    }

    /// Like [`Extractor::extract`], but also returns the items that were skipped.
    pub fn extract_with_report(&self, raw: &RawNode) -> Result<Extraction, ExtractionError> {
        if raw.arity().is_none() {
            return Err(ExtractionError::UnrecognizedRoot(
                "expected a top-level array".to_string(),
            ));
        }
        if raw.at(FORM_BODY).and_then(RawNode::as_array).is_none() {
            return Err(ExtractionError::UnrecognizedRoot(format!(
                "form body at [{}] is missing or not an array",
                FORM_BODY
            )));
        }

        let mut questions = Vec::new();
        let mut skipped = Vec::new();

        for (index, item) in self.items(raw).iter().enumerate() {
            match parse_item(item, &self.kinds) {
                ItemOutcome::Question(question) => questions.push(question),
                ItemOutcome::NotSubmittable => {
                    debug!(index, "Dropping form item without an entry id");
                }
                ItemOutcome::Malformed(reason) => {
                    warn!(index, %reason, "Skipping malformed form item");
                    skipped.push(MalformedItem { index, reason });
                }
            }
        }

        let schema = FormSchema::new(self.title(raw), questions);
        debug!(
            title = %schema.title,
            questions = schema.questions.len(),
            skipped = skipped.len(),
            "Extracted form schema"
        );
        Ok(Extraction { schema, skipped })
    }

    /// The item list, or an empty slice when the form has none.
    fn items<'r>(&self, raw: &'r RawNode) -> &'r [RawNode] {
        match raw.path(&ITEM_LIST) {
            None | Some(RawNode::Null) => &[],
            Some(RawNode::Array(items)) => items.as_slice(),
            Some(other) => {
                warn!(found = %other, "Form item list is not an array, treating it as empty");
                &[]
            }
        }
    }

    fn title(&self, raw: &RawNode) -> String {
        raw.path(&FORM_TITLE)
            .and_then(NodeExt::as_text)
            .or_else(|| self.document_title.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or(DEFAULT_FORM_TITLE)
            .to_string()
    }
}

/// Extracts a schema with the default type table and no document title.
pub fn extract(raw: &RawNode) -> Result<FormSchema, ExtractionError> {
    Extractor::default().extract(raw)
}

