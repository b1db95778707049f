use thiserror::Error;

/// Errors that abort a schema extraction attempt.
///
/// Only the root of the blob is checked strictly. Problems with individual
/// form items are reported as [`crate::extractor::MalformedItem`] records instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("Could not find form data in page")]
    BlobNotFound,

    #[error("Failed to parse form data JSON: {0}")]
    MalformedBlob(String),

    #[error("Form data has an unrecognized root shape: {0}")]
    UnrecognizedRoot(String),
}

/// Errors reported by a [`crate::importer::SourceFetcher`] implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Failed to fetch form '{url}': HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch form: {0}")]
    Transport(String),
}

/// Errors from the fetch-and-extract pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("'{0}' is not a Google Forms URL")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Errors that can occur while encoding, decoding or storing a schema artifact.
#[derive(Error, Debug, Clone)]
pub enum SchemaStoreError {
    #[error("Schema store error: {0}")]
    Generic(String),
}
