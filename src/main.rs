// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, filtered by RUST_LOG)
// 3. Validate the seed and --follow URLs, then open the output file
// 4. Run the crawl, writing links to the file as they are found
// 5. Print a summary and exit (0 = crawl finished, 2 = fatal error)
//
// Fetch failures on individual pages are NOT fatal: they get logged and the
// crawl moves on. Only a missing/unwritable output file, a bad seed or --follow
// URL, or a broken HTTP client stop the program.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod crawl;   // src/crawl/ - the crawl engine
mod error;   // src/error.rs - error types
mod extract; // src/extract/ - link extraction
mod fetch;   // src/fetch/ - page downloading
mod sink;    // src/sink.rs - links output

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use cli::Cli;
use crawl::{CrawlReport, Crawler};
use fetch::HttpFetcher;
use sink::FileSink;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `--json` output on stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    validate_seed(&cli.seed_url)?;
    validate_follow_urls(&cli.follow)?;

    let config = cli.crawl_config();

    // Open the output before any network traffic: no file, no crawl
    let mut sink = FileSink::create(&cli.output)?;

    let fetcher = HttpFetcher::new(cli.timeout()).context("Failed to create HTTP client")?;
    let crawler = Crawler::new(fetcher, config.clone());

    let report = crawler
        .run(&cli.seed_url, &mut sink)
        .await
        .with_context(|| format!("Crawl aborted, {} may be incomplete", cli.output.display()))?;

    if cli.json {
        let summary = serde_json::json!({
            "seed": cli.seed_url,
            "output": cli.output,
            "config": config,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&report);
        println!("✅ Crawl completed. Links saved to {}", cli.output.display());
    }

    Ok(())
}

// The seed has to be an absolute http(s) URL: it goes into the visited set
// as-is and is the base for the first page's relative links
fn validate_seed(seed: &str) -> Result<()> {
    check_crawlable("seed", seed)
}

// `--follow` URLs are queued exactly as given, so they get the same check
fn validate_follow_urls(urls: &[String]) -> Result<()> {
    for url in urls {
        check_crawlable("--follow", url)?;
    }
    Ok(())
}

fn check_crawlable(what: &str, url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| anyhow!("Invalid {} URL '{}': {}", what, url, e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!(
            "Invalid {} URL '{}': unsupported scheme '{}'",
            what,
            url,
            other
        )),
    }
}

fn print_summary(report: &CrawlReport) {
    println!("📊 Summary:");
    println!("   📄 Pages fetched: {}", report.pages_fetched);
    println!("   ❌ Fetch failures: {}", report.fetch_failures);
    println!("   🔗 Links written: {}", report.links_emitted);
    println!("   🗂️  Distinct URLs visited: {}", report.visited);
    println!(
        "   ⏭️  Skipped: {} (depth) / {} (limit) / {} (already seen)",
        report.skipped_depth, report.skipped_capacity, report.skipped_visited
    );
}
