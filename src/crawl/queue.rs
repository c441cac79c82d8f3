// src/crawl/queue.rs
// =============================================================================
// This module drives a crawl run with an explicit work-list.
//
// How it works:
// 1. Start with one task: (seed URL, max depth)
// 2. Take the next task off the work-list
// 3. Skip it if its depth is used up, the visited set is full, or the URL
//    was already claimed
// 4. Otherwise claim the URL in the visited set, then fetch the page
// 5. Write every link found on the page to the sink, right away
// 6. Queue child tasks one level shallower and go back to step 2
//
// Each task goes Pending -> Visiting -> Completed, or Pending -> Skipped.
// A failed fetch still completes the task, it just adds no links and no
// children. Only a sink failure stops the run.
//
// Rust concepts:
// - Generics: Crawler works with any Fetcher, run() with any LinkSink
// - VecDeque: One structure serves as a stack (DFS) or a queue (BFS)
// - HashSet (inside VisitedSet): O(1) "have we seen this URL?"
// =============================================================================

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::{CrawlConfig, FollowPolicy, TraversalOrder};
use super::visited::VisitedSet;
use crate::error::{CrawlError, FetchError};
use crate::fetch::Fetcher;
use crate::sink::LinkSink;

// One pending unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
struct CrawlTask {
    url: String,
    remaining_depth: i32, // hops still allowed from this URL
}

/// Why a task was never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DepthExhausted,
    CapacityReached,
    AlreadyVisited,
}

/// How a task ended.
#[derive(Debug)]
pub enum TaskOutcome {
    Skipped(SkipReason),
    /// Claimed but the fetch failed; contributes nothing
    Failed(FetchError),
    /// Fetched; `links` were written to the sink in this order
    Completed { links: Vec<String> },
}

/// Counters describing one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub links_emitted: usize,
    pub skipped_depth: usize,
    pub skipped_capacity: usize,
    pub skipped_visited: usize,
    /// Distinct URLs claimed, never more than the configured capacity
    pub visited: usize,
}

impl CrawlReport {
    fn record(&mut self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Skipped(SkipReason::DepthExhausted) => self.skipped_depth += 1,
            TaskOutcome::Skipped(SkipReason::CapacityReached) => self.skipped_capacity += 1,
            TaskOutcome::Skipped(SkipReason::AlreadyVisited) => self.skipped_visited += 1,
            TaskOutcome::Failed(_) => self.fetch_failures += 1,
            TaskOutcome::Completed { links } => {
                self.pages_fetched += 1;
                self.links_emitted += links.len();
            }
        }
    }
}

// Pending tasks. DFS pops from the back, BFS from the front; children are
// pushed so that both visit siblings left to right.
struct WorkList {
    tasks: VecDeque<CrawlTask>,
    order: TraversalOrder,
}

impl WorkList {
    fn new(order: TraversalOrder) -> Self {
        Self {
            tasks: VecDeque::new(),
            order,
        }
    }

    fn pop(&mut self) -> Option<CrawlTask> {
        match self.order {
            TraversalOrder::DepthFirst => self.tasks.pop_back(),
            TraversalOrder::BreadthFirst => self.tasks.pop_front(),
        }
    }

    fn push_children(&mut self, urls: Vec<String>, remaining_depth: i32) {
        let children = urls.into_iter().map(|url| CrawlTask {
            url,
            remaining_depth,
        });

        match self.order {
            // reversed so the first link ends up on top of the stack
            TraversalOrder::DepthFirst => {
                let children: Vec<_> = children.collect();
                self.tasks.extend(children.into_iter().rev());
            }
            TraversalOrder::BreadthFirst => self.tasks.extend(children),
        }
    }
}

/// The crawl engine: owns a fetcher and the run settings.
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    // Crawls from `seed` until no pending task is left
    //
    // Every run gets a fresh visited set, so running twice fetches the same
    // pages twice. Links go to `sink` as soon as they are found and the sink
    // is flushed before returning.
    pub async fn run<S: LinkSink>(
        &self,
        seed: &str,
        sink: &mut S,
    ) -> Result<CrawlReport, CrawlError> {
        let mut visited = VisitedSet::new(self.config.capacity);
        let mut report = CrawlReport::default();
        let mut work = WorkList::new(self.config.order);

        work.tasks.push_back(CrawlTask {
            url: seed.to_string(),
            remaining_depth: self.config.max_depth,
        });

        info!(
            seed,
            max_depth = self.config.max_depth,
            capacity = visited.capacity(),
            "starting crawl"
        );

        while let Some(task) = work.pop() {
            let outcome = self.visit(&task, &mut visited, sink).await?;
            report.record(&outcome);

            match outcome {
                TaskOutcome::Skipped(reason) => {
                    debug!(url = %task.url, depth = task.remaining_depth, ?reason, "skipped");
                }
                TaskOutcome::Failed(e) => {
                    warn!(depth = task.remaining_depth, "{}", e);
                }
                TaskOutcome::Completed { links } => {
                    let children = match &self.config.follow {
                        FollowPolicy::Extracted => links,
                        FollowPolicy::Fixed(urls) => urls.clone(),
                    };
                    work.push_children(children, task.remaining_depth - 1);
                }
            }
        }

        sink.flush()?;
        report.visited = visited.len();

        info!(
            pages = report.pages_fetched,
            links = report.links_emitted,
            visited = report.visited,
            "crawl finished"
        );

        Ok(report)
    }

    // Runs a single task through its state machine
    async fn visit<S: LinkSink>(
        &self,
        task: &CrawlTask,
        visited: &mut VisitedSet,
        sink: &mut S,
    ) -> Result<TaskOutcome, CrawlError> {
        if let Some(reason) = skip_reason(task, visited) {
            return Ok(TaskOutcome::Skipped(reason));
        }

        // Claim before fetching, so a URL reached again through a sibling
        // branch is already taken
        if !visited.try_add(&task.url) {
            return Ok(TaskOutcome::Skipped(SkipReason::AlreadyVisited));
        }

        debug!(url = %task.url, depth = task.remaining_depth, "fetching");
        let body = match self.fetcher.fetch(&task.url).await {
            Ok(body) => body,
            Err(e) => return Ok(TaskOutcome::Failed(e)),
        };

        // The page itself is dropped here, only its links live on
        let links = self.config.extractor.extract_links(&body, &task.url);
        drop(body);

        for link in &links {
            info!(page = %task.url, "found link: {}", link);
            sink.write_link(link)?;
        }

        Ok(TaskOutcome::Completed { links })
    }
}

// Checks, in order: depth budget, capacity, already visited
fn skip_reason(task: &CrawlTask, visited: &VisitedSet) -> Option<SkipReason> {
    if task.remaining_depth <= 0 {
        Some(SkipReason::DepthExhausted)
    } else if visited.is_full() {
        Some(SkipReason::CapacityReached)
    } else if visited.contains(&task.url) {
        Some(SkipReason::AlreadyVisited)
    } else {
        None
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a work-list instead of recursion?
//    - A recursive crawl puts one stack frame per hop on the call stack
//    - With an explicit VecDeque the "stack" lives on the heap
//    - It also makes DFS vs BFS a one-line switch in pop()
//
// 2. Why reverse the children for DFS?
//    - pop_back() takes the LAST item pushed
//    - Pushing [a, b, c] reversed gives [c, b, a], so `a` comes out first,
//      exactly like a recursive left-to-right walk
//
// 3. What does `?` do on sink.write_link()?
//    - write_link returns Result<(), SinkError>
//    - `?` converts SinkError into CrawlError (thanks to #[from]) and returns
//    - So a broken output file stops the crawl, while a broken page doesn't
//
// 4. Why is `visited` created inside run()?
//    - The set belongs to one run, not to the Crawler
//    - Nothing else can touch it, so no Mutex is needed
// -----------------------------------------------------------------------------
