//! Locating and decoding the form data embedded in a Google Forms page.
//!
//! Nothing in this module knows what the decoded tree means. It only finds the
//! `FB_PUBLIC_LOAD_DATA_` literal, parses it into a [`RawNode`] and offers a
//! couple of page-level lookups used as fallbacks by the extractor.

use crate::error::ExtractionError;
use regex::Regex;
use serde_json::Deserializer;
use std::sync::OnceLock;

pub mod node;
pub mod title;

pub use node::{NodeExt, RawNode};
pub use title::locate_title;

fn blob_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"var\s+FB_PUBLIC_LOAD_DATA_\s*=\s*").expect("blob marker regex is valid")
    })
}

fn form_url() -> &'static Regex {
    static FORM_URL: OnceLock<Regex> = OnceLock::new();
    FORM_URL.get_or_init(|| {
        Regex::new(r"^https://(docs\.google\.com/forms/|forms\.gle/)")
            .expect("form url regex is valid")
    })
}

/// Returns the page text starting at the embedded data literal.
pub fn locate_blob(html: &str) -> Result<&str, ExtractionError> {
    blob_marker()
        .find(html)
        .map(|m| &html[m.end()..])
        .ok_or(ExtractionError::BlobNotFound)
}

/// Finds the embedded data literal in `html` and decodes it.
///
/// The literal is read as exactly one JSON value, so semicolons inside string
/// values do not cut it short. Anything after the value is ignored.
pub fn parse_public_data(html: &str) -> Result<RawNode, ExtractionError> {
    let literal = locate_blob(html)?;
    match Deserializer::from_str(literal).into_iter::<RawNode>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(ExtractionError::MalformedBlob(e.to_string())),
        None => Err(ExtractionError::MalformedBlob(
            "data literal is empty".to_string(),
        )),
    }
}

/// Whether `url` points at a Google Form (full or short link).
pub fn is_form_url(url: &str) -> bool {
    form_url().is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_urls_are_recognized() {
        assert!(is_form_url("https://docs.google.com/forms/d/e/1FAIpQLSc/viewform"));
        assert!(is_form_url("https://forms.gle/abc123"));
        assert!(!is_form_url("http://docs.google.com/forms/d/e/x"));
        assert!(!is_form_url("https://example.com/forms/"));
    }

    #[test]
    fn missing_marker_is_blob_not_found() {
        assert_eq!(
            parse_public_data("<html><body>nothing</body></html>"),
            Err(ExtractionError::BlobNotFound)
        );
    }
}
