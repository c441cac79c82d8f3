// src/extract/html.rs
// =============================================================================
// This module extracts links from HTML pages with a real parser.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Compared to the pattern scan this also understands single quotes,
// extra attributes and odd whitespace. Site-relative paths are resolved
// with the `url` crate, so "/b" on "http://site/a" becomes "http://site/b".
// =============================================================================

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::{classify, Href, MAX_HREF_LEN};

pub(super) fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // "a[href]" is a constant and known to be valid, so unwrap can't fire
    let selector = Selector::parse("a[href]").unwrap();

    // Parse the base URL once; if it's unusable we fall back to gluing strings
    let base = Url::parse(base_url).ok();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if href.len() > MAX_HREF_LEN {
            debug!(len = href.len(), "skipping oversized href");
            continue;
        }

        match classify(href) {
            Href::Absolute(url) => links.push(url.to_string()),
            Href::SiteRelative(path) => links.push(resolve_path(base.as_ref(), base_url, path)),
            Href::Ignored => {}
        }
    }

    links
}

// Resolves "/path" against the page URL
//
// Examples:
//   base = "http://site/a/b", path = "/c" -> "http://site/c"
//   base = "not a url",       path = "/c" -> "not a url/c"
fn resolve_path(base: Option<&Url>, base_url: &str, path: &str) -> String {
    match base.map(|b| b.join(path)) {
        Some(Ok(url)) => url.to_string(),
        _ => format!("{}{}", base_url, path),
    }
}
