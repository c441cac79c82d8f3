// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every crawl setting has a default, so running `link-harvester` with no
// arguments crawls http://example.com two levels deep into links.txt.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::crawl::{
    CrawlConfig, FollowPolicy, TraversalOrder, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH,
};
use crate::extract::Extractor;

#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version = "0.1.0",
    about = "Crawl a website to a bounded depth and save every link found",
    long_about = "link-harvester fetches a seed page, writes every link on it to a file, \
                  then follows those links until the depth budget or the page limit runs out."
)]
pub struct Cli {
    /// URL to start crawling from
    #[arg(default_value = "http://example.com")]
    pub seed_url: String,

    /// How many hops to follow from the seed (0 or less fetches nothing)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, allow_negative_numbers = true)]
    pub depth: i32,

    /// File that receives one discovered link per line
    #[arg(long, short, default_value = "links.txt")]
    pub output: PathBuf,

    /// Maximum number of distinct URLs fetched in one run
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Visit order: depth-first (dfs) or breadth-first (bfs)
    #[arg(long, value_enum, default_value_t = TraversalOrder::DepthFirst)]
    pub order: TraversalOrder,

    /// Link extraction strategy
    #[arg(long, value_enum, default_value_t = Extractor::Pattern)]
    pub extractor: Extractor,

    /// Recurse into these URLs instead of the links found on each page
    ///
    /// Can be given several times. Links found on pages are still written
    /// to the output file.
    #[arg(long = "follow", value_name = "URL")]
    pub follow: Vec<String>,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the crawl summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        let follow = if self.follow.is_empty() {
            FollowPolicy::Extracted
        } else {
            FollowPolicy::Fixed(self.follow.clone())
        };

        CrawlConfig::default()
            .with_max_depth(self.depth)
            .with_capacity(self.capacity)
            .with_order(self.order)
            .with_extractor(self.extractor)
            .with_follow(follow)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
