use crate::error::{ExtractionError, FetchError, ImportError};
use crate::extractor::Extractor;
use crate::schema::FormSchema;
use crate::source::{is_form_url, locate_title, parse_public_data};
use tracing::debug;

/// Retrieves the HTML of a form page.
///
/// This crate never performs network I/O itself. Callers plug in their HTTP
/// client here and own its timeout, retry and cancellation policy.
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> SourceFetcher for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// Decodes a form schema from an already fetched page.
///
/// `fallback_title` takes precedence over the page `<title>` when the form data
/// itself has no title.
pub fn import_html(
    html: &str,
    fallback_title: Option<&str>,
) -> Result<FormSchema, ExtractionError> {
    let raw = parse_public_data(html)?;
    let mut builder = Extractor::builder();
    if let Some(title) = fallback_title
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| locate_title(html))
    {
        builder = builder.with_document_title(title);
    }
    builder.build().extract(&raw)
}

/// Runs the fetch, locate and extract steps for one form URL.
pub struct FormImporter<F: SourceFetcher> {
    fetcher: F,
    fallback_title: Option<String>,
}

impl<F: SourceFetcher> FormImporter<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            fallback_title: None,
        }
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = Some(title.into());
        self
    }

    pub fn import(&self, url: &str) -> Result<FormSchema, ImportError> {
        if !is_form_url(url) {
            return Err(ImportError::InvalidUrl(url.to_string()));
        }
        let html = self.fetcher.fetch(url)?;
        debug!(url, bytes = html.len(), "Fetched form page");
        Ok(import_html(&html, self.fallback_title.as_deref())?)
    }
}
