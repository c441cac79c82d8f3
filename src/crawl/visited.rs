// src/crawl/visited.rs
// =============================================================================
// The set of URLs a crawl run has already claimed.
//
// A URL goes in right before it is fetched and never comes out, so every URL
// is fetched at most once per run. The set also has a hard size limit: once
// it's full, nothing new is accepted and the remaining work simply dries up.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
    capacity: usize,
}

impl VisitedSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            urls: HashSet::new(),
            capacity,
        }
    }

    /// Exact string match, no normalisation.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Records `url` if there's room and it's new.
    ///
    /// Returns false when the URL was already there or the set is full. This
    /// is the one gate deciding whether a fetch may happen.
    pub fn try_add(&mut self, url: &str) -> bool {
        if self.is_full() || self.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn is_full(&self) -> bool {
        self.urls.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
