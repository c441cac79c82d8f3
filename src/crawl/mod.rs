// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Depth-bounded walk starting from a seed URL
// - Each URL fetched at most once per run (visited set)
// - Hard cap on how many distinct URLs a run may fetch
// - Depth-first or breadth-first order
//
// Submodules:
// - config: CrawlConfig and its policies
// - visited: the bounded visited set
// - queue: the Crawler and its work-list
// =============================================================================

mod config;
mod queue;
mod visited;

pub use config::{
    CrawlConfig, FollowPolicy, TraversalOrder, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH,
};
pub use queue::{CrawlReport, Crawler};
