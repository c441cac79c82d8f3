// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP(S) with reqwest.
//
// Key functionality:
// - Validates the URL before sending anything
// - Makes a plain GET request (no custom headers, cookies or auth)
// - Follows redirects transparently (up to a limit, to break loops)
// - Turns every kind of failure into a readable FetchError
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Traits: HttpFetcher implements the Fetcher trait from mod.rs
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Client};
use url::Url;

use super::{Body, Fetcher};
use crate::error::FetchError;

// How many redirect hops we follow before giving up on a URL
const MAX_REDIRECTS: usize = 10;

/// Fetcher backed by a single reusable reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client
    //
    // Parameters:
    //   timeout: optional per-request timeout. None keeps reqwest's default
    //            (no timeout at all), like the reference crawler.
    //
    // Returns an error only if the TLS backend cannot be initialised,
    // which is fatal for the whole run.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().redirect(redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Body, FetchError> {
        let parsed = validate_url(url)?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        // reqwest already followed any redirects, so this is the final status
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Failed {
                url: url.to_string(),
                cause: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_error(url, e))?;

        Ok(body.to_vec())
    }
}

// Checks that a URL is absolute and uses a scheme we can GET
fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

// Turns a reqwest error into a short human-readable cause
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Too many redirects
// - Connection refused
// - Body cut off half way
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let cause = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else if error.is_body() || error.is_decode() {
        format!("could not read response body: {}", error)
    } else {
        error.to_string()
    };

    FetchError::Failed {
        url: url.to_string(),
        cause,
    }
}
