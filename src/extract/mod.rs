// src/extract/mod.rs
// =============================================================================
// This module pulls links out of fetched HTML.
//
// Submodules:
// - pattern: a plain text scan for `<a href="...">` (the default)
// - html: a real HTML parser (scraper) for messier pages
//
// Both strategies share the same rules for which hrefs we keep:
// - "http..."  -> already absolute, kept as-is
// - "/path"    -> site-relative, turned into an absolute URL
// - anything else (#frag, mailto:, javascript:, //cdn..., ../x) is dropped
//
// Extraction never fails. Broken markup just means fewer links.
// =============================================================================

mod html;
mod pattern;

use clap::ValueEnum;
use serde::Serialize;

/// Longest href value we accept. Longer values are skipped one by one.
pub const MAX_HREF_LEN: usize = 2048;

/// Which extraction strategy the crawler uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Extractor {
    /// Literal `<a href="` scan; relative paths are appended to the base
    #[default]
    Pattern,
    /// Full HTML parse; relative paths are resolved with URL rules
    Dom,
}

impl Extractor {
    /// Returns the links in `html`, in document order, duplicates included.
    pub fn extract_links(self, html: &[u8], base_url: &str) -> Vec<String> {
        // Pages are not always valid UTF-8; a replacement char never sits
        // inside the ASCII markers we look for
        let text = String::from_utf8_lossy(html);

        match self {
            Extractor::Pattern => pattern::extract_links(&text, base_url),
            Extractor::Dom => html::extract_links(&text, base_url),
        }
    }
}

/// How a raw href value should be treated.
#[derive(Debug, PartialEq, Eq)]
enum Href<'a> {
    Absolute(&'a str),
    SiteRelative(&'a str),
    Ignored,
}

fn classify(raw: &str) -> Href<'_> {
    if raw.starts_with("http") {
        Href::Absolute(raw)
    } else if raw.starts_with("//") {
        // protocol-relative, we don't guess the scheme
        Href::Ignored
    } else if raw.starts_with('/') {
        Href::SiteRelative(raw)
    } else {
        Href::Ignored
    }
}
