//! HTML markup inspection
//!
//! Helpers used by the content-keyword strategy to pull the title and the
//! meta-refresh marker out of a fetched page. Parsing is total: malformed
//! markup degrades to "no title" / "no marker", never an error.

use scraper::{Html, Selector};

/// Extract the text of the first `<title>` element, trimmed.
///
/// Returns `None` when the document has no title or the title is empty.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Whether the document carries a meta-refresh redirect marker.
///
/// The test runs against the lower-cased serialized document, so tag case,
/// attribute case, and quoting style in the source markup are all
/// irrelevant.
pub fn has_meta_refresh(html: &str) -> bool {
    let document = Html::parse_document(html);
    let serialized = document.root_element().html().to_lowercase();
    serialized.contains(r#"http-equiv="refresh""#)
}
