use scraper::{Html, Selector};

/// Returns the trimmed text of the document's `<title>`, if it has a non-empty one.
pub fn locate_title(html: &str) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let document = Html::parse_document(html);
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_title() {
        let html = "<html><head><title>  Contact Us </title></head><body></body></html>";
        assert_eq!(locate_title(html), Some("Contact Us".to_string()));
    }

    #[test]
    fn blank_or_missing_title_is_none() {
        assert_eq!(locate_title("<html><head><title> </title></head></html>"), None);
        assert_eq!(locate_title("<html><body>hi</body></html>"), None);
    }
}
