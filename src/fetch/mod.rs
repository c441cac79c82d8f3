// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only ever talks to the `Fetcher` trait, never to reqwest
// directly. That way tests can hand it a fake fetcher that serves canned
// HTML, and the real program hands it `HttpFetcher`.
//
// Submodules:
// - http: the reqwest-backed implementation
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// Raw response body of a page. Owned by the crawler only until its links
/// have been extracted.
pub type Body = Vec<u8>;

/// Anything that can turn a URL into a page body.
///
/// Implementations must not retry: the first failure is final for that URL
/// within a run.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Body, FetchError>;
}
