// src/error.rs
// =============================================================================
// Error types shared across the crawler.
//
// There are two very different kinds of failure:
// - FetchError: one page could not be downloaded. The crawl logs it and
//   moves on to the next task.
// - SinkError: we could not write the links file. Writing links is the only
//   thing this tool produces, so this aborts the whole run.
//
// main.rs wraps everything in anyhow for the final error message, but the
// crawl engine itself returns these typed enums so callers (and tests) can
// match on them.
// =============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single URL could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL is not something we can send a request to
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network failure, timeout, redirect loop or non-2xx status
    #[error("failed to fetch {url}: {cause}")]
    Failed { url: String, cause: String },
}

/// Problems with the output file.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot create output file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write link to output: {0}")]
    Write(#[from] io::Error),
}

/// Errors that end a crawl run early.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}
