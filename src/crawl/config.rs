// src/crawl/config.rs
// =============================================================================
// Knobs that shape a crawl run.
//
// The defaults match the classic behaviour of this tool: depth 2, at most
// 1000 distinct pages, depth-first, following whatever links the page has.
// =============================================================================

use clap::ValueEnum;
use serde::Serialize;

use crate::extract::Extractor;

/// Reference capacity of the visited set
pub const DEFAULT_CAPACITY: usize = 1000;

/// Reference depth budget
pub const DEFAULT_MAX_DEPTH: i32 = 2;

/// Order in which pending tasks are taken off the work-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Follow the first link all the way down before its siblings
    #[default]
    #[value(name = "dfs")]
    DepthFirst,
    /// Visit every link of a page before going one level deeper
    #[value(name = "bfs")]
    BreadthFirst,
}

/// Which URLs become child tasks after a page is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowPolicy {
    /// The links just extracted from the page
    #[default]
    Extracted,
    /// Always the same list, whatever the page contains
    Fixed(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlConfig {
    /// Hops allowed from the seed. Tasks at depth <= 0 are never fetched.
    pub max_depth: i32,
    /// Most distinct URLs a single run will ever fetch
    pub capacity: usize,
    pub order: TraversalOrder,
    pub follow: FollowPolicy,
    pub extractor: Extractor,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            capacity: DEFAULT_CAPACITY,
            order: TraversalOrder::default(),
            follow: FollowPolicy::default(),
            extractor: Extractor::default(),
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_follow(mut self, follow: FollowPolicy) -> Self {
        self.follow = follow;
        self
    }

    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }
}
