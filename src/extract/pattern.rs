// src/extract/pattern.rs
// =============================================================================
// Literal text scan for anchor links.
//
// How it works:
// 1. Find the next `<a href="` (tag and attribute name matched ignoring case)
// 2. Take everything up to the next `"` as the href value
// 3. Keep it if it's absolute, or glue it onto the base URL if it starts with /
// 4. Repeat from just after the closing quote
//
// Known limits (on purpose, this is a scan and not a parser):
// - single-quoted or unquoted attributes are not seen
// - extra attributes or whitespace before href hide the link
// - "/path" is appended to the base URL as plain text, so a base that
//   already has a path gives "http://site/page/path"
// Use the DOM extractor when those matter.
// =============================================================================

use tracing::debug;

use super::{classify, Href, MAX_HREF_LEN};

const ANCHOR_MARKER: &str = "<a href=\"";

pub(super) fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // ASCII lowercasing keeps every byte offset identical, so positions found
    // in `haystack` can slice the original text
    let haystack = html.to_ascii_lowercase();
    let mut cursor = 0;

    while let Some(found) = haystack[cursor..].find(ANCHOR_MARKER) {
        let value_start = cursor + found + ANCHOR_MARKER.len();

        // Unterminated attribute: nothing after this point can be trusted
        let Some(value_len) = html[value_start..].find('"') else {
            break;
        };

        let raw = &html[value_start..value_start + value_len];
        cursor = value_start + value_len + 1;

        if raw.len() > MAX_HREF_LEN {
            debug!(len = raw.len(), "skipping oversized href");
            continue;
        }

        match classify(raw) {
            Href::Absolute(url) => links.push(url.to_string()),
            Href::SiteRelative(path) => links.push(format!("{}{}", base_url, path)),
            Href::Ignored => {}
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_relative_in_order() {
        let html = r#"<a href="http://x.test/a">A</a> <a href="/b">B</a>"#;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/a", "http://x.test/b"]);
    }

    #[test]
    fn test_unterminated_anchor_yields_nothing() {
        let html = r#"<p>intro</p><a href="http://x.test/a"#;
        assert!(extract_links(html, "http://x.test").is_empty());
    }

    #[test]
    fn test_unterminated_anchor_stops_scan() {
        // Once a quote is missing, the scan gives up on the rest of the page
        let html = r#"<a href="/first">1</a><a href="/broken"#;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/first"]);
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        let html = r#"<A HREF="/upper">U</A><a Href="/mixed">M</a>"#;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/upper", "http://x.test/mixed"]);
    }

    #[test]
    fn test_href_value_keeps_its_case() {
        let html = r#"<A HREF="http://X.test/CamelCase">x</A>"#;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://X.test/CamelCase"]);
    }

    #[test]
    fn test_drops_unsupported_forms() {
        let html = r##"
            <a href="#top">top</a>
            <a href="mailto:me@x.test">mail</a>
            <a href="javascript:void(0)">js</a>
            <a href="//cdn.x.test/lib">cdn</a>
            <a href="relative/page">rel</a>
            <a href="/kept">kept</a>
        "##;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/kept"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<a href="/same">1</a><a href="/same">2</a>"#;
        let links = extract_links(html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/same", "http://x.test/same"]);
    }

    #[test]
    fn test_oversized_href_is_skipped_not_fatal() {
        let long = format!("http://x.test/{}", "a".repeat(MAX_HREF_LEN));
        let html = format!(r#"<a href="{}">long</a><a href="/after">after</a>"#, long);
        let links = extract_links(&html, "http://x.test");
        assert_eq!(links, vec!["http://x.test/after"]);
    }

    #[test]
    fn test_relative_path_is_plain_concatenation() {
        let html = r#"<a href="/b">B</a>"#;
        let links = extract_links(html, "http://x.test/a");
        assert_eq!(links, vec!["http://x.test/a/b"]);
    }

    #[test]
    fn test_single_quotes_are_not_recognised() {
        let html = "<a href='/single'>S</a>";
        assert!(extract_links(html, "http://x.test").is_empty());
    }
}
