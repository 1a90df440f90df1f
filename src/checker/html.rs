// src/checker/html.rs
// =============================================================================
// This module extracts checkable links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative URLs against the page they were found on
//
// Extraction is pure: no network, no filesystem, no dedup. The same URL can
// come back twice if the page links to it twice; the crawl session makes sure
// it is only checked once.
//
// Rust concepts:
// - Iterators: For processing collections
// - Closures: Anonymous functions (|x| ...)
// - Slices of &str: the skip-prefix table below
// =============================================================================

use scraper::{Html, Selector};
use tracing::trace;
use url::Url;

use super::scope::is_in_scope;

// hrefs starting with any of these never point at something we can fetch
const SKIPPED_PREFIXES: &[&str] = &["#", "mailto:", "tel:", "javascript:"];

// Extracts every in-scope link from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   origin: the page's own location, used for scope and resolution
//
// Returns: Vec<String> containing absolute URLs (duplicates kept)
//
// Example:
//   html   = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   origin = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, origin: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant known to be valid, so this cannot fail
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| is_checkable_href(href))
        .filter(|href| is_in_scope(href, origin))
        .filter_map(|href| match origin.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                trace!(href, error = %e, "dropping unresolvable href");
                None
            }
        })
        .collect()
}

// Empty hrefs and fragment/mail/phone/script links are skipped
fn is_checkable_href(href: &str) -> bool {
    !href.is_empty() && !SKIPPED_PREFIXES.iter().any(|prefix| href.starts_with(prefix))
}
